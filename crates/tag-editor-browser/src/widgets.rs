//! Page widgets unrelated to the tag list: expanding text areas, profile
//! field toggles and the file picker label.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use tag_editor_core::{EXPANDABLE_ATTR, SurfaceError, SurfaceResult, ToggleState, fit_height_css};

use crate::dom::{by_id, js_err, query, query_all, set_shown};

/// Selector for auto-expanding text areas.
pub fn expandable_selector() -> String {
    format!("textarea[{EXPANDABLE_ATTR}]")
}

/// Resize a text area to fit its content.
pub fn expand_textarea(textarea: &HtmlElement) -> SurfaceResult {
    let style = textarea.style();
    style.remove_property("height").map_err(js_err)?;
    style
        .set_property("height", &fit_height_css(textarea.scroll_height()))
        .map_err(js_err)
}

/// Resize every expandable text area on the page.
pub fn expand_all_textareas(document: &Document) {
    for element in query_all(document, &expandable_selector()) {
        if let Some(textarea) = element.dyn_ref::<HtmlElement>() {
            if let Err(err) = expand_textarea(textarea) {
                tracing::warn!(%err, "failed to expand textarea");
            }
        }
    }
}

/// Apply a toggle state to its button and field.
pub fn apply_toggle(button: &Element, field: &Element, state: ToggleState) -> SurfaceResult {
    set_shown(field, state.visible)?;
    field
        .set_attribute("aria-expanded", state.aria_expanded)
        .map_err(js_err)?;
    field
        .set_attribute("aria-hidden", state.aria_hidden)
        .map_err(js_err)?;
    button
        .class_list()
        .toggle_with_force("selected", state.selected)
        .map_err(js_err)?;
    if let Ok(Some(icon)) = button.query_selector(".icon") {
        icon.set_text_content(Some(state.icon));
    }
    Ok(())
}

/// Apply a toggle state by element ids.
pub fn apply_toggle_by_id(
    document: &Document,
    button_id: &str,
    field_id: &str,
    state: ToggleState,
) -> SurfaceResult {
    let button = by_id(document, button_id)?;
    let field = by_id(document, field_id)?;
    apply_toggle(&button, &field, state)
}

/// Copy the chosen file's name into the picker's label.
pub fn update_file_label(document: &Document, input: &HtmlInputElement) -> SurfaceResult {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };
    let label = query(document, ".custom-file-label")
        .map_err(|_| SurfaceError::MissingElement(".custom-file-label".into()))?;
    label.set_text_content(Some(&file.name()));
    Ok(())
}
