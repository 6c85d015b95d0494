//! Platform abstraction for tag editor rendering.
//!
//! The editor keeps its state in plain Rust types and describes every visible
//! change through the [`TagSurface`] trait. The browser implementation turns
//! these calls into DOM mutations; tests use a recording fake.

use crate::tag::{TagId, TagText};

/// Error type for surface operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// An element the page template should provide is not there.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The platform rejected an operation.
    #[error("platform error: {0}")]
    Platform(String),
}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError::Platform(s.to_string())
    }
}

impl From<String> for SurfaceError {
    fn from(s: String) -> Self {
        SurfaceError::Platform(s)
    }
}

pub type SurfaceResult = Result<(), SurfaceError>;

/// Rendering operations the tag editor needs from its host.
///
/// Methods are called in the order the visible change should happen. A
/// failing call does not stop the editor: it logs and carries on, so
/// implementations should leave the page consistent after each call.
pub trait TagSurface {
    /// Show or hide the container of read-only view tags.
    fn set_view_visible(&mut self, visible: bool) -> SurfaceResult;

    /// Show or hide the edit panel (delete badges and the add control).
    fn set_edit_visible(&mut self, visible: bool) -> SurfaceResult;

    /// Insert an empty edit input before the add control and focus it.
    fn insert_edit_input(&mut self, id: TagId) -> SurfaceResult;

    /// Remove the edit input for this id.
    fn remove_edit_input(&mut self, id: TagId) -> SurfaceResult;

    /// Append a view tag showing `label`.
    fn insert_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult;

    /// Change the label and link target of a view tag.
    fn update_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult;

    /// Remove a view tag.
    fn remove_view_tag(&mut self, id: TagId) -> SurfaceResult;

    /// Insert a delete badge before the "new tag" control.
    fn insert_delete_badge(&mut self, id: TagId, text: &TagText) -> SurfaceResult;

    /// Remove a delete badge.
    fn remove_delete_badge(&mut self, id: TagId) -> SurfaceResult;

    /// Create the hidden width-measuring span for an edit input.
    fn insert_width_machine(&mut self, id: TagId) -> SurfaceResult;

    /// Resize the edit input so `text` fits, using its width machine.
    fn fit_edit_input(&mut self, id: TagId, text: &str) -> SurfaceResult;

    /// Remove every width machine.
    fn clear_width_machines(&mut self) -> SurfaceResult;

    /// Write the hidden form field.
    fn set_hidden_value(&mut self, value: &str) -> SurfaceResult;
}
