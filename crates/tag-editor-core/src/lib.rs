//! tag-editor-core: entry tag editing logic without browser dependencies.
//!
//! This crate provides:
//! - `TagText`, `TagId`, `TagList` - validated tags and the hidden-field codec
//! - `TagEditor<S>` - edit/add/rename/save/delete, generic over a `TagSurface`
//! - `NewEntryTags` - incremental hidden field for the new-entry form
//! - Key filtering, profile toggles, text area sizing and the page config

pub mod config;
pub mod editor;
pub mod error;
pub mod keys;
pub mod list;
pub mod new_entry;
pub mod platform;
pub mod tag;
pub mod textarea;
pub mod toggle;

#[cfg(test)]
mod testing;

pub use config::PageConfig;
pub use editor::{EditorMode, PLACEHOLDER_LABEL, PendingTag, SaveOutcome, TagEditor};
pub use error::TagError;
pub use keys::{Key, KeyCombo, KeyFilter, Modifiers, filter_single_line_key, filter_tag_key};
pub use list::{HiddenField, TagEntry, TagList};
pub use new_entry::NewEntryTags;
pub use platform::{SurfaceError, SurfaceResult, TagSurface};
pub use smol_str::SmolStr;
pub use tag::{MAX_TAG_LEN, SEPARATOR, TagId, TagIdAllocator, TagText};
pub use textarea::{EXPANDABLE_ATTR, fit_height, fit_height_css};
pub use toggle::{FieldToggle, ToggleState, TogglePair};
