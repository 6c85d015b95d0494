//! Tag entry on the "new entry" form.
//!
//! The new-entry form has no edit/save cycle. The hidden field is built as
//! the user goes: leaving a tag input writes what was typed, and the "new
//! tag" button adds a separator first. Each input keeps its place in the
//! field, so editing an input again replaces its text. A separator followed
//! by an empty input leaves a trailing comma, which
//! [`TagList::parse`](crate::TagList::parse) drops when the form is read back.

use crate::list::HiddenField;
use crate::tag::TagId;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Separator,
    Input(TagId, String),
}

/// Incremental hidden-field builder for the new-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntryTags {
    /// Value the page was rendered with.
    initial: String,
    segments: Vec<Segment>,
    field: HiddenField,
}

impl NewEntryTags {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            field: HiddenField::new(initial.clone()),
            initial,
            segments: Vec::new(),
        }
    }

    /// Current hidden-field value.
    pub fn value(&self) -> &str {
        self.field.as_str()
    }

    /// The "new tag" button was clicked.
    ///
    /// Adds a separator iff the field is non-empty. Returns whether the
    /// hidden field changed.
    pub fn on_separator_click(&mut self) -> bool {
        if self.field.is_empty() {
            return false;
        }
        self.segments.push(Segment::Separator);
        let changed = self.rebuild();
        tracing::debug!(hidden = %self.field, changed, "new tag separator");
        changed
    }

    /// Tag input `id` lost focus with `value` in it.
    ///
    /// The first non-empty blur of an input appends its text; later blurs
    /// replace that text in place. Returns whether the hidden field changed.
    pub fn on_input_blur(&mut self, id: TagId, value: &str) -> bool {
        let existing = self.segments.iter_mut().find_map(|seg| match seg {
            Segment::Input(seg_id, text) if *seg_id == id => Some(text),
            _ => None,
        });
        match existing {
            Some(text) if text == value => return false,
            Some(text) => {
                text.clear();
                text.push_str(value);
            }
            None if value.is_empty() => return false,
            None => self.segments.push(Segment::Input(id, value.to_string())),
        }
        let changed = self.rebuild();
        tracing::debug!(%id, hidden = %self.field, changed, "tag input committed");
        changed
    }

    fn rebuild(&mut self) -> bool {
        let mut field = HiddenField::new(self.initial.clone());
        for segment in &self.segments {
            match segment {
                Segment::Separator => {
                    field.append_separator();
                }
                Segment::Input(_, text) => field.append_raw(text),
            }
        }
        let changed = field != self.field;
        self.field = field;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blur_appends_nothing() {
        let mut tags = NewEntryTags::new("red");
        assert!(!tags.on_input_blur(TagId(2), ""));
        assert_eq!(tags.value(), "red");
    }

    #[test]
    fn test_separator_once_when_non_empty() {
        let mut tags = NewEntryTags::new("red");
        assert!(tags.on_separator_click());
        assert_eq!(tags.value(), "red,");

        let mut empty = NewEntryTags::default();
        assert!(!empty.on_separator_click());
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn test_building_a_list() {
        let mut tags = NewEntryTags::default();
        tags.on_separator_click();
        tags.on_input_blur(TagId(1), "red");
        tags.on_separator_click();
        tags.on_input_blur(TagId(2), "blue");
        assert_eq!(tags.value(), "red,blue");
    }

    #[test]
    fn test_repeat_blur_with_same_text_appends_nothing() {
        let mut tags = NewEntryTags::default();
        assert!(tags.on_input_blur(TagId(1), "red"));
        assert!(!tags.on_input_blur(TagId(1), "red"));
        assert_eq!(tags.value(), "red");
    }

    #[test]
    fn test_edited_input_replaces_its_text() {
        let mut tags = NewEntryTags::default();
        assert!(tags.on_input_blur(TagId(1), "red"));
        assert!(tags.on_input_blur(TagId(1), "rust"));
        assert_eq!(tags.value(), "rust");
    }

    #[test]
    fn test_edit_keeps_position_among_other_tags() {
        let mut tags = NewEntryTags::new("old");
        tags.on_separator_click();
        tags.on_input_blur(TagId(1), "red");
        tags.on_separator_click();
        tags.on_input_blur(TagId(2), "blue");
        assert_eq!(tags.value(), "old,red,blue");

        assert!(tags.on_input_blur(TagId(1), "rust"));
        assert_eq!(tags.value(), "old,rust,blue");

        // Clearing an input leaves an empty segment, dropped on parse.
        assert!(tags.on_input_blur(TagId(1), ""));
        assert_eq!(tags.value(), "old,,blue");
        let (list, _) = crate::TagList::parse(tags.value());
        assert_eq!(list.to_hidden(), "old,blue");
    }

    #[test]
    fn test_empty_blur_does_not_lock_input() {
        let mut tags = NewEntryTags::default();
        assert!(!tags.on_input_blur(TagId(1), ""));
        assert!(tags.on_input_blur(TagId(1), "red"));
        assert_eq!(tags.value(), "red");
    }
}
