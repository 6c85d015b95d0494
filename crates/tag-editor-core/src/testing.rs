//! Recording surface for unit tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::platform::{SurfaceError, SurfaceResult, TagSurface};
use crate::tag::{TagId, TagText};

/// Keeps a tiny model of the page plus a log of every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub log: Vec<String>,
    pub view_visible: bool,
    pub edit_visible: bool,
    pub view_tags: BTreeMap<TagId, String>,
    pub edit_inputs: BTreeSet<TagId>,
    pub delete_badges: BTreeMap<TagId, String>,
    pub width_machines: BTreeSet<TagId>,
    pub fitted: BTreeMap<TagId, String>,
    pub hidden: String,
    /// Make every call fail after recording it.
    pub fail_all: bool,
}

impl RecordingSurface {
    /// A page whose hidden field and view tags show `hidden`.
    pub fn with_hidden(hidden: &str) -> Self {
        let mut surface = Self {
            view_visible: true,
            hidden: hidden.to_string(),
            ..Self::default()
        };
        for (idx, tag) in hidden.split(',').filter(|s| !s.is_empty()).enumerate() {
            let id = TagId(idx as u32 + 1);
            surface.view_tags.insert(id, tag.to_string());
            surface.delete_badges.insert(id, tag.to_string());
        }
        surface
    }

    fn record(&mut self, entry: String) -> SurfaceResult {
        self.log.push(entry);
        if self.fail_all {
            Err(SurfaceError::MissingElement("test".into()))
        } else {
            Ok(())
        }
    }
}

impl TagSurface for RecordingSurface {
    fn set_view_visible(&mut self, visible: bool) -> SurfaceResult {
        self.view_visible = visible;
        let state = if visible { "shown" } else { "hidden" };
        self.record(format!("view {state}"))
    }

    fn set_edit_visible(&mut self, visible: bool) -> SurfaceResult {
        self.edit_visible = visible;
        let state = if visible { "shown" } else { "hidden" };
        self.record(format!("edit {state}"))
    }

    fn insert_edit_input(&mut self, id: TagId) -> SurfaceResult {
        self.edit_inputs.insert(id);
        self.record(format!("input {id}"))
    }

    fn remove_edit_input(&mut self, id: TagId) -> SurfaceResult {
        self.edit_inputs.remove(&id);
        self.record(format!("remove input {id}"))
    }

    fn insert_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult {
        self.view_tags.insert(id, label.to_string());
        self.record(format!("view-tag {id} {label}"))
    }

    fn update_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult {
        self.view_tags.insert(id, label.to_string());
        self.record(format!("view-tag {id} = {label}"))
    }

    fn remove_view_tag(&mut self, id: TagId) -> SurfaceResult {
        self.view_tags.remove(&id);
        self.record(format!("remove view-tag {id}"))
    }

    fn insert_delete_badge(&mut self, id: TagId, text: &TagText) -> SurfaceResult {
        self.delete_badges.insert(id, text.to_string());
        self.record(format!("delete-badge {id} {text}"))
    }

    fn remove_delete_badge(&mut self, id: TagId) -> SurfaceResult {
        self.delete_badges.remove(&id);
        self.record(format!("remove delete-badge {id}"))
    }

    fn insert_width_machine(&mut self, id: TagId) -> SurfaceResult {
        self.width_machines.insert(id);
        self.record(format!("width {id}"))
    }

    fn fit_edit_input(&mut self, id: TagId, text: &str) -> SurfaceResult {
        self.fitted.insert(id, text.to_string());
        self.record(format!("fit {id} {text}"))
    }

    fn clear_width_machines(&mut self) -> SurfaceResult {
        self.width_machines.clear();
        self.record("clear widths".to_string())
    }

    fn set_hidden_value(&mut self, value: &str) -> SurfaceResult {
        self.hidden = value.to_string();
        self.record(format!("hidden {value}"))
    }
}
