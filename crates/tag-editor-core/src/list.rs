//! The committed tag list and its hidden-field encoding.
//!
//! The hidden form field carries the tags as comma-joined text with no
//! escaping. [`TagList`] is the structured form; [`HiddenField`] is the raw
//! text used by the new-entry form, which builds the value incrementally and
//! may briefly end with a separator.

use std::fmt;

use crate::tag::{SEPARATOR, TagId, TagIdAllocator, TagText};

/// One committed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub id: TagId,
    pub text: TagText,
}

/// Ordered list of committed tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    entries: Vec<TagEntry>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a hidden-field value, assigning ids `1..=n` in order.
    ///
    /// Empty segments are dropped, so `"red,,blue,"` yields two tags. The
    /// returned allocator continues after the last assigned id.
    pub fn parse(hidden: &str) -> (Self, TagIdAllocator) {
        let mut entries = Vec::new();
        for (idx, segment) in split_segments(hidden).enumerate() {
            entries.push(TagEntry {
                id: TagId(idx as u32 + 1),
                text: TagText::from_segment(segment),
            });
        }
        let ids = TagIdAllocator::new(entries.len());
        (Self { entries }, ids)
    }

    /// Build a list from entries whose ids were assigned elsewhere (e.g. read
    /// from rendered view tags).
    pub fn from_entries(entries: Vec<TagEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, id: TagId, text: TagText) {
        self.entries.push(TagEntry { id, text });
    }

    /// Remove the entry with this id, returning its text.
    pub fn remove(&mut self, id: TagId) -> Option<TagText> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).text)
    }

    pub fn get(&self, id: TagId) -> Option<&TagText> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.text)
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter()
    }

    /// Tag texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    /// Encode for the hidden field.
    pub fn to_hidden(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(entry.text.as_str())?;
        }
        Ok(())
    }
}

fn split_segments(hidden: &str) -> impl Iterator<Item = &str> {
    hidden.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Raw hidden-field text for the new-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenField {
    value: String,
}

impl HiddenField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a separator, unless nothing has been entered yet.
    ///
    /// Returns whether a separator was added.
    pub fn append_separator(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.push(SEPARATOR);
        true
    }

    /// Append raw text as typed, with no separator handling.
    pub fn append_raw(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Tags currently encoded, ignoring empty segments.
    pub fn tags(&self) -> Vec<&str> {
        split_segments(&self.value).collect()
    }
}

impl fmt::Display for HiddenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
