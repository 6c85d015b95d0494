//! Height calculation for auto-expanding text areas.

/// Attribute marking a text area as auto-expanding.
pub const EXPANDABLE_ATTR: &str = "data-expandable";

/// Extra pixels added to `scrollHeight` so the border does not clip text.
pub const BORDER_ALLOWANCE_PX: i32 = 2;

/// Height in pixels a text area needs to show all of its content.
pub fn fit_height(scroll_height: i32) -> i32 {
    scroll_height.max(0) + BORDER_ALLOWANCE_PX
}

/// CSS value for [`fit_height`].
pub fn fit_height_css(scroll_height: i32) -> String {
    format!("{}px", fit_height(scroll_height))
}
