//! JsTagPage - a mounted tag page handle for JavaScript.

use wasm_bindgen::prelude::*;

use tag_editor_browser::{PageConfig, PersistHook, TagId, TagPage};

use crate::types::{JsSaveOutcome, TagSnapshot};

/// A tag page mounted on the current document.
///
/// Listeners stay attached until the handle is freed.
#[wasm_bindgen]
pub struct JsTagPage {
    inner: TagPage,
}

/// Mount the tag editor and page widgets on the current document.
///
/// `config` overrides element ids and selectors; pass `undefined` for the
/// defaults. `onSave` is called with the hidden-field value after each save.
#[wasm_bindgen(js_name = mountTagPage)]
pub fn mount_tag_page(
    config: JsValue,
    on_save: Option<js_sys::Function>,
) -> Result<JsTagPage, JsError> {
    let config = parse_config(config)?;
    let hook = on_save.map(persist_hook);
    let inner = TagPage::mount(config, hook).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(JsTagPage { inner })
}

#[wasm_bindgen]
impl JsTagPage {
    /// Value the hidden tag field will submit.
    #[wasm_bindgen(js_name = hiddenValue)]
    pub fn hidden_value(&self) -> String {
        self.inner.hidden_value()
    }

    #[wasm_bindgen(js_name = isNewEntry)]
    pub fn is_new_entry(&self) -> bool {
        self.inner.is_new_entry()
    }

    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self) -> Result<bool, JsError> {
        let editor = self.inner.editor();
        let editor = editor
            .try_borrow()
            .map_err(|_| JsError::new("Tag editor busy"))?;
        Ok(editor.is_editing())
    }

    /// Current tags, pending inputs and mode.
    pub fn snapshot(&self) -> Result<TagSnapshot, JsError> {
        let editor = self.inner.editor();
        let editor = editor
            .try_borrow()
            .map_err(|_| JsError::new("Tag editor busy"))?;
        Ok(TagSnapshot::of(
            &editor,
            self.inner.hidden_value(),
            self.inner.is_new_entry(),
        ))
    }

    /// Show or hide the edit panel. Returns whether it is now shown.
    #[wasm_bindgen(js_name = toggleEdit)]
    pub fn toggle_edit(&self) -> Result<bool, JsError> {
        self.with_editor(|editor| Ok(editor.toggle_edit() == tag_editor_browser::EditorMode::Editing))
    }

    /// Add an empty tag input. Returns its tag number.
    #[wasm_bindgen(js_name = addTag)]
    pub fn add_tag(&self) -> Result<u32, JsError> {
        self.with_editor(|editor| Ok(editor.add_new_tag().0))
    }

    /// Commit the edit panel.
    ///
    /// `onSave` runs after the editor is released, so it may read the page
    /// back.
    pub fn save(&self) -> Result<JsSaveOutcome, JsError> {
        self.inner
            .save()
            .map(JsSaveOutcome::from)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Delete tag number `id`. Returns the removed text.
    #[wasm_bindgen(js_name = deleteTag)]
    pub fn delete_tag(&self, id: u32) -> Result<String, JsError> {
        self.with_editor(|editor| {
            editor
                .delete(TagId(id))
                .map(|text| text.to_string())
                .map_err(|e| JsError::new(&e.to_string()))
        })
    }
}

impl JsTagPage {
    fn with_editor<T>(
        &self,
        f: impl FnOnce(&mut tag_editor_browser::DomTagEditor) -> Result<T, JsError>,
    ) -> Result<T, JsError> {
        let editor = self.inner.editor();
        let mut editor = editor
            .try_borrow_mut()
            .map_err(|_| JsError::new("Tag editor busy"))?;
        f(&mut editor)
    }
}

fn parse_config(config: JsValue) -> Result<PageConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(PageConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid page config: {}", e)))
}

fn persist_hook(callback: js_sys::Function) -> PersistHook {
    Box::new(move |hidden: &str| {
        let this = JsValue::null();
        if let Err(err) = callback.call1(&this, &JsValue::from_str(hidden)) {
            tracing::warn!(?err, "onSave callback threw");
        }
    })
}
