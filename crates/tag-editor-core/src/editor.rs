//! The tag editor state machine.
//!
//! `TagEditor` owns the committed tag list, the inputs being edited and the
//! id allocator for one page. Each operation updates that state and then
//! mirrors the change onto a [`TagSurface`].

use crate::error::TagError;
use crate::list::TagList;
use crate::platform::{SurfaceResult, TagSurface};
use crate::tag::{TagId, TagIdAllocator, TagText};

/// Label shown on the view tag of a freshly added, still empty tag.
pub const PLACEHOLDER_LABEL: &str = "tag name";

/// Whether the editor is showing view tags or the edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing,
}

/// An edit input that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTag {
    pub id: TagId,
    /// Raw input value, exactly as typed.
    pub text: String,
}

/// Result of saving the edit panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// New hidden-field value.
    pub hidden: String,
    /// Inputs that became tags, in order.
    pub committed: Vec<TagId>,
    /// Inputs that were empty and got removed.
    pub discarded: Vec<TagId>,
}

/// Tag editor for one entry page.
pub struct TagEditor<S> {
    surface: S,
    tags: TagList,
    pending: Vec<PendingTag>,
    ids: TagIdAllocator,
    mode: EditorMode,
}

impl<S: TagSurface> TagEditor<S> {
    /// Create an editor over tags that are already rendered on the page.
    pub fn new(surface: S, tags: TagList, ids: TagIdAllocator) -> Self {
        Self {
            surface,
            tags,
            pending: Vec::new(),
            ids,
            mode: EditorMode::Viewing,
        }
    }

    /// Create an editor from a hidden-field value, numbering tags `1..=n`.
    pub fn from_hidden(surface: S, hidden: &str) -> Self {
        let (tags, ids) = TagList::parse(hidden);
        Self::new(surface, tags, ids)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    pub fn pending(&self) -> &[PendingTag] {
        &self.pending
    }

    /// Current hidden-field value.
    pub fn hidden_value(&self) -> String {
        self.tags.to_hidden()
    }

    /// Whether this id belongs to an edit input that has not been saved.
    pub fn is_pending(&self, id: TagId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Switch between view tags and the edit panel.
    ///
    /// Leaving edit mode this way keeps pending inputs as they are; only
    /// [`save`](Self::save) commits them.
    pub fn toggle_edit(&mut self) -> EditorMode {
        match self.mode {
            EditorMode::Viewing => self.enter_edit(),
            EditorMode::Editing => {
                self.mode = EditorMode::Viewing;
                let r = self.surface.set_edit_visible(false);
                self.log_failure("hide edit panel", r);
                let r = self.surface.set_view_visible(true);
                self.log_failure("show view tags", r);
            }
        }
        self.mode
    }

    /// Hide the view tags and show the edit panel.
    pub fn enter_edit(&mut self) {
        if self.mode == EditorMode::Editing {
            return;
        }
        tracing::debug!(tags = self.tags.len(), "entering tag edit mode");
        self.mode = EditorMode::Editing;
        let r = self.surface.set_view_visible(false);
        self.log_failure("hide view tags", r);
        let r = self.surface.set_edit_visible(true);
        self.log_failure("show edit panel", r);
    }

    /// Add an empty edit input with a placeholder view tag and focus it.
    ///
    /// The hidden field is not touched until the next save.
    pub fn add_new_tag(&mut self) -> TagId {
        let id = self.ids.allocate();
        tracing::debug!(%id, "adding new tag input");
        self.pending.push(PendingTag {
            id,
            text: String::new(),
        });

        let r = self.surface.insert_edit_input(id);
        self.log_failure("insert edit input", r);
        let r = self.surface.insert_view_tag(id, PLACEHOLDER_LABEL);
        self.log_failure("insert view tag", r);
        let r = self.surface.insert_width_machine(id);
        self.log_failure("insert width machine", r);
        id
    }

    /// Mirror typed text into the matching view tag and resize the input.
    pub fn rename(&mut self, id: TagId, text: &str) -> Result<(), TagError> {
        let pending = self
            .pending
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TagError::UnknownTag(id))?;
        pending.text.clear();
        pending.text.push_str(text);

        let r = self.surface.update_view_tag(id, text);
        self.log_failure("update view tag", r);
        let r = self.surface.fit_edit_input(id, text);
        self.log_failure("fit edit input", r);
        Ok(())
    }

    /// Commit every pending input and return to view mode.
    ///
    /// Inputs that are empty after sanitizing are discarded together with
    /// their view tags. The rest are appended to the tag list in input order
    /// and become delete badges.
    ///
    /// Forwarding [`SaveOutcome::hidden`] to the server is left to the
    /// caller, so it can happen once the editor is no longer borrowed.
    pub fn save(&mut self) -> Result<SaveOutcome, TagError> {
        if self.mode != EditorMode::Editing {
            return Err(TagError::NotEditing);
        }

        let r = self.surface.set_edit_visible(false);
        self.log_failure("hide edit panel", r);

        let mut committed = Vec::new();
        let mut discarded = Vec::new();
        for PendingTag { id, text } in std::mem::take(&mut self.pending) {
            match TagText::sanitize(&text) {
                Ok(tag) => {
                    if tag.as_str() != text {
                        let r = self.surface.update_view_tag(id, tag.as_str());
                        self.log_failure("update view tag", r);
                    }
                    let r = self.surface.insert_delete_badge(id, &tag);
                    self.log_failure("insert delete badge", r);
                    let r = self.surface.remove_edit_input(id);
                    self.log_failure("remove edit input", r);
                    self.tags.push(id, tag);
                    committed.push(id);
                }
                Err(err) => {
                    tracing::debug!(%id, %err, "discarding tag input");
                    let r = self.surface.remove_edit_input(id);
                    self.log_failure("remove edit input", r);
                    let r = self.surface.remove_view_tag(id);
                    self.log_failure("remove view tag", r);
                    discarded.push(id);
                }
            }
        }

        let hidden = self.tags.to_hidden();
        let r = self.surface.set_hidden_value(&hidden);
        self.log_failure("write hidden field", r);
        let r = self.surface.clear_width_machines();
        self.log_failure("clear width machines", r);
        let r = self.surface.set_view_visible(true);
        self.log_failure("show view tags", r);
        self.mode = EditorMode::Viewing;

        tracing::debug!(
            committed = committed.len(),
            discarded = discarded.len(),
            "saved tags"
        );
        Ok(SaveOutcome {
            hidden,
            committed,
            discarded,
        })
    }

    /// Remove a committed tag through its delete badge.
    pub fn delete(&mut self, id: TagId) -> Result<TagText, TagError> {
        let text = self.tags.remove(id).ok_or(TagError::UnknownTag(id))?;
        tracing::debug!(%id, tag = %text, "deleting tag");

        let r = self.surface.remove_delete_badge(id);
        self.log_failure("remove delete badge", r);
        let r = self.surface.remove_view_tag(id);
        self.log_failure("remove view tag", r);
        let hidden = self.tags.to_hidden();
        let r = self.surface.set_hidden_value(&hidden);
        self.log_failure("write hidden field", r);
        Ok(text)
    }

    fn log_failure(&self, what: &str, result: SurfaceResult) {
        if let Err(err) = result {
            tracing::warn!(%err, "tag surface: {what} failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    fn editor(hidden: &str) -> TagEditor<RecordingSurface> {
        TagEditor::from_hidden(RecordingSurface::with_hidden(hidden), hidden)
    }

    #[test]
    fn test_add_then_save_appends_in_order() {
        let mut ed = editor("");
        ed.enter_edit();
        let a = ed.add_new_tag();
        let b = ed.add_new_tag();
        ed.rename(a, "rust").unwrap();
        ed.rename(b, "wasm").unwrap();

        let outcome = ed.save().unwrap();
        assert_eq!(outcome.hidden, "rust,wasm");
        assert_eq!(outcome.committed, vec![a, b]);
        assert!(outcome.discarded.is_empty());
        assert_eq!(ed.surface().hidden, "rust,wasm");
        assert_eq!(ed.mode(), EditorMode::Viewing);
        assert!(ed.pending().is_empty());
    }

    #[test]
    fn test_save_discards_empty_input_and_view_tag() {
        let mut ed = editor("red");
        ed.enter_edit();
        let empty = ed.add_new_tag();
        assert!(ed.surface().view_tags.contains_key(&empty));

        let outcome = ed.save().unwrap();
        assert_eq!(outcome.hidden, "red");
        assert_eq!(outcome.discarded, vec![empty]);
        assert!(!ed.surface().view_tags.contains_key(&empty));
        assert!(!ed.surface().edit_inputs.contains(&empty));
        assert!(ed.surface().delete_badges.get(&empty).is_none());
    }

    #[test]
    fn test_whitespace_only_input_is_discarded() {
        let mut ed = editor("");
        ed.enter_edit();
        let id = ed.add_new_tag();
        ed.rename(id, "   ").unwrap();
        let outcome = ed.save().unwrap();
        assert_eq!(outcome.hidden, "");
        assert_eq!(outcome.discarded, vec![id]);
    }

    #[test]
    fn test_red_blue_green_then_delete_blue() {
        let mut ed = editor("red,blue");
        ed.enter_edit();
        let green = ed.add_new_tag();
        ed.rename(green, "green").unwrap();
        assert_eq!(ed.save().unwrap().hidden, "red,blue,green");

        ed.enter_edit();
        let removed = ed.delete(TagId(2)).unwrap();
        assert_eq!(removed.as_str(), "blue");
        assert_eq!(ed.hidden_value(), "red,green");
        assert_eq!(ed.surface().hidden, "red,green");
        assert!(!ed.surface().view_tags.contains_key(&TagId(2)));
    }

    #[test]
    fn test_delete_duplicate_text_removes_one() {
        let mut ed = editor("red,red");
        ed.delete(TagId(1)).unwrap();
        assert_eq!(ed.hidden_value(), "red");
        assert_eq!(ed.delete(TagId(1)), Err(TagError::UnknownTag(TagId(1))));
    }

    #[test]
    fn test_rename_mirrors_view_tag() {
        let mut ed = editor("");
        ed.enter_edit();
        let id = ed.add_new_tag();
        assert_eq!(
            ed.surface().view_tags.get(&id).map(String::as_str),
            Some(PLACEHOLDER_LABEL)
        );
        ed.rename(id, "gre").unwrap();
        ed.rename(id, "green").unwrap();
        assert_eq!(
            ed.surface().view_tags.get(&id).map(String::as_str),
            Some("green")
        );
        assert_eq!(ed.surface().fitted.get(&id).map(String::as_str), Some("green"));
        assert_eq!(ed.pending()[0].text, "green");
        // Nothing reaches the hidden field before save.
        assert_eq!(ed.surface().hidden, "");
    }

    #[test]
    fn test_rename_unknown_id() {
        let mut ed = editor("red");
        assert_eq!(
            ed.rename(TagId(1), "blue"),
            Err(TagError::UnknownTag(TagId(1)))
        );
    }

    #[test]
    fn test_save_requires_edit_mode() {
        let mut ed = editor("red");
        assert_eq!(ed.save(), Err(TagError::NotEditing));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut ed = editor("red,blue");
        ed.enter_edit();
        ed.delete(TagId(2)).unwrap();
        let id = ed.add_new_tag();
        assert_eq!(id, TagId(3));
    }

    #[test]
    fn test_comma_in_input_is_stripped_on_save() {
        let mut ed = editor("");
        ed.enter_edit();
        let id = ed.add_new_tag();
        ed.rename(id, "a,b").unwrap();
        assert_eq!(ed.save().unwrap().hidden, "ab");
        assert_eq!(ed.surface().view_tags.get(&id).map(String::as_str), Some("ab"));
    }

    #[test]
    fn test_toggle_edit_keeps_pending() {
        let mut ed = editor("");
        assert_eq!(ed.toggle_edit(), EditorMode::Editing);
        let id = ed.add_new_tag();
        assert_eq!(ed.toggle_edit(), EditorMode::Viewing);
        assert!(ed.is_pending(id));
        assert!(ed.surface().view_visible);
        assert!(!ed.surface().edit_visible);
    }

    #[test]
    fn test_surface_call_order() {
        let mut ed = editor("red");
        ed.enter_edit();
        let id = ed.add_new_tag();
        ed.rename(id, "blue").unwrap();
        ed.save().unwrap();

        insta::assert_snapshot!(ed.surface().log.join("\n"), @r"
        view hidden
        edit shown
        input 2
        view-tag 2 tag name
        width 2
        view-tag 2 = blue
        fit 2 blue
        edit hidden
        delete-badge 2 blue
        remove input 2
        hidden red,blue
        clear widths
        view shown
        ");
    }

    #[test]
    fn test_surface_failure_does_not_abort_save() {
        let mut ed = editor("");
        ed.enter_edit();
        let id = ed.add_new_tag();
        ed.rename(id, "ok").unwrap();
        ed.surface_mut().fail_all = true;
        let outcome = ed.save().unwrap();
        assert_eq!(outcome.hidden, "ok");
        assert_eq!(ed.hidden_value(), "ok");
    }
}
