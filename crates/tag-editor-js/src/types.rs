//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use tag_editor_browser::{DomTagEditor, SaveOutcome};

/// Read-only view of the page's tag state.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct TagSnapshot {
    /// Value the hidden field will submit.
    pub hidden: String,
    /// Committed tags in display order.
    pub tags: Vec<JsTag>,
    /// Numbers of edit inputs not yet saved.
    pub pending: Vec<u32>,
    pub editing: bool,
    pub new_entry: bool,
}

/// One committed tag.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsTag {
    pub id: u32,
    pub text: String,
}

impl TagSnapshot {
    pub(crate) fn of(editor: &DomTagEditor, hidden: String, new_entry: bool) -> Self {
        Self {
            hidden,
            tags: editor
                .tags()
                .iter()
                .map(|entry| JsTag {
                    id: entry.id.0,
                    text: entry.text.to_string(),
                })
                .collect(),
            pending: editor.pending().iter().map(|p| p.id.0).collect(),
            editing: editor.is_editing(),
            new_entry,
        }
    }
}

/// Result of saving the edit panel.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsSaveOutcome {
    pub hidden: String,
    pub committed: Vec<u32>,
    pub discarded: Vec<u32>,
}

impl From<SaveOutcome> for JsSaveOutcome {
    fn from(outcome: SaveOutcome) -> Self {
        Self {
            hidden: outcome.hidden,
            committed: outcome.committed.into_iter().map(|id| id.0).collect(),
            discarded: outcome.discarded.into_iter().map(|id| id.0).collect(),
        }
    }
}
