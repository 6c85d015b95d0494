//! Key filtering for hosts that handle their own keyboard events.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use tag_editor_browser::{Key, KeyCombo, KeyFilter, Modifiers, filter_single_line_key, filter_tag_key};

/// The parts of a `KeyboardEvent` the filters look at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase", default)]
pub struct JsKeyEvent {
    pub key: String,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
}

impl JsKeyEvent {
    fn to_combo(&self) -> KeyCombo {
        KeyCombo::with_modifiers(
            Key::parse(&self.key),
            Modifiers {
                ctrl: self.ctrl_key,
                alt: self.alt_key,
                shift: self.shift_key,
                meta: self.meta_key,
            },
        )
    }
}

/// What the host should do with the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub enum JsKeyFilter {
    Allow,
    Suppress,
    Commit,
}

impl From<KeyFilter> for JsKeyFilter {
    fn from(filter: KeyFilter) -> Self {
        match filter {
            KeyFilter::Allow => Self::Allow,
            KeyFilter::Suppress => Self::Suppress,
            KeyFilter::Commit => Self::Commit,
        }
    }
}

/// Classify a keydown in a tag input.
#[wasm_bindgen(js_name = filterTagKey)]
pub fn filter_tag_key_js(event: JsKeyEvent) -> JsKeyFilter {
    filter_tag_key(&event.to_combo()).into()
}

/// Classify a keydown in a single-line text field.
#[wasm_bindgen(js_name = filterSingleLineKey)]
pub fn filter_single_line_key_js(event: JsKeyEvent) -> JsKeyFilter {
    filter_single_line_key(&event.to_combo()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: &str) -> JsKeyEvent {
        JsKeyEvent {
            key: key.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tag_key_mapping() {
        assert_eq!(filter_tag_key_js(event("a")), JsKeyFilter::Allow);
        assert_eq!(filter_tag_key_js(event(",")), JsKeyFilter::Suppress);
        assert_eq!(filter_tag_key_js(event("Enter")), JsKeyFilter::Commit);

        let altgr = JsKeyEvent {
            ctrl_key: true,
            alt_key: true,
            ..event("q")
        };
        assert_eq!(filter_tag_key_js(altgr), JsKeyFilter::Suppress);
    }

    #[test]
    fn test_single_line_enter() {
        assert_eq!(filter_single_line_key_js(event("Enter")), JsKeyFilter::Commit);
        assert_eq!(filter_single_line_key_js(event("x")), JsKeyFilter::Allow);
    }
}
