//! Browser keyboard event handling.
//!
//! Converts `KeyboardEvent`s into core [`KeyCombo`]s and applies the core key
//! filters, preventing default and blurring the field where they say so.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use tag_editor_core::{Key, KeyCombo, KeyFilter, Modifiers, filter_single_line_key, filter_tag_key};

/// Build a key combo from a DOM keyboard event.
pub fn key_combo_from_event(event: &KeyboardEvent) -> KeyCombo {
    KeyCombo {
        key: Key::parse(&event.key()),
        modifiers: Modifiers {
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
            meta: event.meta_key(),
        },
    }
}

/// Apply a filter decision to the event.
pub fn apply_key_filter(event: &KeyboardEvent, filter: KeyFilter) -> KeyFilter {
    if filter.prevents_default() {
        event.prevent_default();
    }
    if filter == KeyFilter::Commit {
        if let Some(field) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        {
            let _ = field.blur();
        }
    }
    filter
}

/// Handle a keydown in a tag input.
pub fn handle_tag_keydown(event: &KeyboardEvent) -> KeyFilter {
    // Let IME composition through untouched.
    if event.is_composing() {
        return KeyFilter::Allow;
    }
    let combo = key_combo_from_event(event);
    let filter = filter_tag_key(&combo);
    if filter == KeyFilter::Suppress {
        tracing::trace!(key = ?combo.key, "suppressed key in tag input");
    }
    apply_key_filter(event, filter)
}

/// Handle a keydown in a single-line text field.
pub fn handle_single_line_keydown(event: &KeyboardEvent) -> KeyFilter {
    if event.is_composing() {
        return KeyFilter::Allow;
    }
    let combo = key_combo_from_event(event);
    apply_key_filter(event, filter_single_line_key(&combo))
}
