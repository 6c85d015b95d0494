//! Tag identifiers and tag text.
//!
//! Every tag on a page is addressed by a numeric [`TagId`]. The same number is
//! shared by the view tag, the edit input, the delete badge and the width
//! machine belonging to that tag, so all four can be found from any one of
//! them.

use std::fmt;

use smol_str::{SmolStr, ToSmolStr};

use crate::error::TagError;

/// Maximum length of a tag in characters (matches the input's `maxlength`).
pub const MAX_TAG_LEN: usize = 20;

/// Separator used in the hidden field.
pub const SEPARATOR: char = ',';

/// Numeric identifier of a tag within one page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub u32);

impl TagId {
    /// DOM id of the read-only view tag.
    pub fn view_id(self) -> SmolStr {
        smol_str::format_smolstr!("tag{}", self.0)
    }

    /// DOM id of the editable input.
    pub fn edit_id(self) -> SmolStr {
        smol_str::format_smolstr!("edit-tag-{}", self.0)
    }

    /// DOM id of the delete badge shown in edit mode.
    pub fn delete_id(self) -> SmolStr {
        smol_str::format_smolstr!("delete-tag-{}", self.0)
    }

    /// DOM id of the width-measuring helper span.
    pub fn width_id(self) -> SmolStr {
        smol_str::format_smolstr!("width{}", self.0)
    }

    /// Extract the id from any of the DOM ids above.
    ///
    /// Takes the first run of ASCII digits, so `edit-tag-12` and `tag12` both
    /// yield `TagId(12)`.
    pub fn from_dom_id(dom_id: &str) -> Option<Self> {
        let start = dom_id.find(|c: char| c.is_ascii_digit())?;
        let digits: &str = &dom_id[start..];
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits[..end].parse().ok().map(TagId)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out increasing tag ids for one editor instance.
///
/// Seeded from the number of view tags the server rendered, so new ids never
/// collide with the template's `tag1..tagN`. Ids are never reused, even after
/// the tag they named is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdAllocator {
    next: u32,
}

impl TagIdAllocator {
    /// Create an allocator for a page that already shows `existing` tags.
    pub fn new(existing: usize) -> Self {
        Self {
            next: existing as u32 + 1,
        }
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> TagId {
        let id = TagId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    pub fn peek(&self) -> TagId {
        TagId(self.next)
    }
}

impl Default for TagIdAllocator {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Validated text of a single tag.
///
/// Never empty and never contains [`SEPARATOR`], so a list of tags can always
/// be joined into the hidden field and split back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagText(SmolStr);

impl TagText {
    /// Validate user-supplied tag text.
    pub fn new(text: &str) -> Result<Self, TagError> {
        if text.is_empty() {
            return Err(TagError::Empty);
        }
        if text.contains(SEPARATOR) {
            return Err(TagError::ContainsSeparator(text.to_string()));
        }
        let len = text.chars().count();
        if len > MAX_TAG_LEN {
            return Err(TagError::too_long(len));
        }
        Ok(Self(text.to_smolstr()))
    }

    /// Clean up raw input text before validating it.
    ///
    /// Commas are removed and surrounding whitespace trimmed. Text that is
    /// empty afterwards yields `TagError::Empty`, which callers treat as the
    /// user cancelling the tag.
    pub fn sanitize(raw: &str) -> Result<Self, TagError> {
        let cleaned: String = raw.chars().filter(|&c| c != SEPARATOR).collect();
        let trimmed = cleaned.trim();
        let truncated: String = trimmed.chars().take(MAX_TAG_LEN).collect();
        Self::new(truncated.trim_end())
    }

    /// Accept the text of a tag the server already rendered.
    ///
    /// Surrounding whitespace is trimmed and empty or comma-bearing text is
    /// refused. The length limit only applies to new input.
    pub fn from_rendered(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.contains(SEPARATOR) {
            return None;
        }
        Some(Self(text.to_smolstr()))
    }

    /// Wrap a segment already split out of the hidden field.
    ///
    /// Length is not checked: tags rendered by the server are accepted as-is.
    pub(crate) fn from_segment(segment: &str) -> Self {
        debug_assert!(!segment.is_empty() && !segment.contains(SEPARATOR));
        Self(segment.to_smolstr())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids() {
        let id = TagId(7);
        assert_eq!(id.view_id(), "tag7");
        assert_eq!(id.edit_id(), "edit-tag-7");
        assert_eq!(id.delete_id(), "delete-tag-7");
        assert_eq!(id.width_id(), "width7");
    }

    #[test]
    fn test_from_dom_id() {
        assert_eq!(TagId::from_dom_id("edit-tag-12"), Some(TagId(12)));
        assert_eq!(TagId::from_dom_id("tag3"), Some(TagId(3)));
        assert_eq!(TagId::from_dom_id("width40"), Some(TagId(40)));
        assert_eq!(TagId::from_dom_id("new-tag"), None);
    }

    #[test]
    fn test_allocator_seeded_past_existing() {
        let mut ids = TagIdAllocator::new(3);
        assert_eq!(ids.peek(), TagId(4));
        assert_eq!(ids.allocate(), TagId(4));
        assert_eq!(ids.allocate(), TagId(5));
        assert_eq!(ids.peek(), TagId(6));
    }

    #[test]
    fn test_tag_text_rejects_comma() {
        assert_eq!(
            TagText::new("a,b"),
            Err(TagError::ContainsSeparator("a,b".to_string()))
        );
        assert_eq!(TagText::new(""), Err(TagError::Empty));
    }

    #[test]
    fn test_tag_text_too_long() {
        let long = "x".repeat(MAX_TAG_LEN + 1);
        assert_eq!(
            TagText::new(&long),
            Err(TagError::TooLong {
                len: MAX_TAG_LEN + 1,
                max: MAX_TAG_LEN
            })
        );
        assert!(TagText::new(&"x".repeat(MAX_TAG_LEN)).is_ok());
    }

    #[test]
    fn test_from_rendered() {
        let long = "z".repeat(MAX_TAG_LEN + 5);
        assert_eq!(
            TagText::from_rendered(&format!("\n  {long} ")).map(|t| t.to_string()),
            Some(long)
        );
        assert_eq!(TagText::from_rendered("  "), None);
        assert_eq!(TagText::from_rendered("a,b"), None);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(TagText::sanitize("  red ").unwrap().as_str(), "red");
        assert_eq!(TagText::sanitize("re,d").unwrap().as_str(), "red");
        assert_eq!(TagText::sanitize(" , "), Err(TagError::Empty));
        assert_eq!(
            TagText::sanitize(&"y".repeat(30)).unwrap().as_str().len(),
            MAX_TAG_LEN
        );
    }
}
