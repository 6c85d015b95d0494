//! Browser DOM layer for the entry tag editor.
//!
//! This crate renders the core `TagEditor` into the page and routes browser
//! events to it. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: element lookup and show/hide helpers
//! - `surface`: `TagSurface` implementation building the tag markup
//! - `events`: keyboard event parsing and key filtering
//! - `widgets`: expanding text areas, profile toggles, file picker label
//! - `page`: mounting everything onto a document with delegated listeners
//!
//! # Re-exports
//!
//! This crate re-exports `tag-editor-core` for convenience, so consumers
//! only need to depend on `tag-editor-browser`.

// Re-export core crate
pub use tag_editor_core;
pub use tag_editor_core::*;

pub mod dom;
pub mod events;
pub mod page;
pub mod surface;
pub mod widgets;

pub use events::{handle_single_line_keydown, handle_tag_keydown, key_combo_from_event};
pub use page::{DomTagEditor, PersistHook, SaveError, TagPage, read_existing_tags};
pub use surface::DomTagSurface;
pub use widgets::{apply_toggle, expand_all_textareas, expand_textarea, update_file_label};
