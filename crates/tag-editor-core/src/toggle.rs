//! Show/hide state for the profile page's field toggles.

use serde::{Deserialize, Serialize};

/// Icon text shown on a toggle button while its field is hidden.
pub const ICON_COLLAPSED: &str = "edit";
/// Icon text shown on a toggle button while its field is visible.
pub const ICON_EXPANDED: &str = "close";

/// A button paired with the form section it shows and hides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePair {
    pub button_id: String,
    pub field_id: String,
}

impl TogglePair {
    pub fn new(button_id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            field_id: field_id.into(),
        }
    }

    /// The three account fields on the profile page.
    pub fn profile_defaults() -> Vec<Self> {
        ["update-username", "update-email", "update-password"]
            .into_iter()
            .map(|field| Self::new(format!("{field}-btn"), field))
            .collect()
    }
}

/// Visibility of one toggled field. Fields start hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldToggle {
    visible: bool,
}

/// Presentation attributes matching a toggle's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub visible: bool,
    /// Text for the button's `.icon` child.
    pub icon: &'static str,
    pub aria_expanded: &'static str,
    pub aria_hidden: &'static str,
    /// Whether the button carries the `selected` class.
    pub selected: bool,
}

impl FieldToggle {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the attributes to apply.
    pub fn toggle(&mut self) -> ToggleState {
        self.visible = !self.visible;
        self.state()
    }

    pub fn state(&self) -> ToggleState {
        ToggleState {
            visible: self.visible,
            icon: if self.visible {
                ICON_EXPANDED
            } else {
                ICON_COLLAPSED
            },
            aria_expanded: bool_attr(self.visible),
            aria_hidden: bool_attr(!self.visible),
            selected: self.visible,
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
