//! Error types for tag editing.

use crate::tag::{MAX_TAG_LEN, TagId};

/// Errors produced by the tag model and editor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag text was empty after sanitizing.
    #[error("tag text is empty")]
    Empty,

    /// Tag text contained the hidden-field separator.
    #[error("tag text {0:?} contains a comma")]
    ContainsSeparator(String),

    /// Tag text is longer than the input allows.
    #[error("tag text is {len} characters, maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// No tag with this id is known to the editor.
    #[error("no tag with id {0}")]
    UnknownTag(TagId),

    /// The operation only makes sense while editing.
    #[error("tag editor is not in edit mode")]
    NotEditing,
}

impl TagError {
    pub(crate) fn too_long(len: usize) -> Self {
        Self::TooLong {
            len,
            max: MAX_TAG_LEN,
        }
    }
}
