//! Page contract: which elements the editor works with.
//!
//! Every id and selector the page template has to provide lives here, so the
//! editor logic never hard-codes a layout. Defaults match the journal's entry
//! and profile templates; hosts pass a partial object to override any of
//! them.

use serde::{Deserialize, Serialize};

use crate::toggle::TogglePair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Hidden input holding the comma-joined tag list.
    pub hidden_field_id: String,
    /// Wrapper shown while not editing.
    pub view_container_id: String,
    /// Element view tags are appended to.
    pub view_tags_id: String,
    /// Edit panel with delete badges and the add control.
    pub edit_panel_id: String,
    /// Button that enters edit mode.
    pub edit_button_id: String,
    /// Button that saves edits.
    pub save_button_id: String,
    /// Class of view tags rendered by the server.
    pub view_tag_class: String,
    /// Class of delete badges.
    pub delete_tag_class: String,
    /// Class of tag inputs.
    pub tag_input_class: String,
    /// Selector for "add new tag" controls.
    pub add_tag_selector: String,
    /// The "new tag" control; delete badges go before it.
    pub new_tag_button_id: String,
    /// Form id that marks the new-entry page.
    pub new_entry_form_id: String,
    /// Container width machines are appended to.
    pub entry_selector: String,
    /// Text fields where Enter blurs instead of inserting a newline.
    pub single_line_ids: Vec<String>,
    /// Prefix of tag listing links.
    pub listing_base: String,
    /// Profile page show/hide buttons.
    pub toggles: Vec<TogglePair>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hidden_field_id: "hidden_tags".to_owned(),
            view_container_id: "view-tags-container".to_owned(),
            view_tags_id: "view-tags".to_owned(),
            edit_panel_id: "edit-tags".to_owned(),
            edit_button_id: "edit-tags-btn".to_owned(),
            save_button_id: "save-tag-btn".to_owned(),
            view_tag_class: "view-tag".to_owned(),
            delete_tag_class: "delete-tag".to_owned(),
            tag_input_class: "badge-input".to_owned(),
            add_tag_selector: ".add-tag".to_owned(),
            new_tag_button_id: "new-tag".to_owned(),
            new_entry_form_id: "new-entry".to_owned(),
            entry_selector: ".entry".to_owned(),
            single_line_ids: vec!["name".to_owned()],
            listing_base: "/listing/".to_owned(),
            toggles: TogglePair::profile_defaults(),
        }
    }
}

impl PageConfig {
    /// Link target for a tag's listing page.
    pub fn listing_href(&self, tag: &str) -> String {
        format!("{}{}", self.listing_base, tag)
    }
}
