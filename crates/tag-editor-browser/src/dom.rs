//! Small DOM helpers shared by the page modules.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use tag_editor_core::SurfaceError;

/// Convert a JS exception into a surface error.
pub fn js_err(err: JsValue) -> SurfaceError {
    SurfaceError::Platform(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

/// The page's document.
pub fn document() -> Result<Document, SurfaceError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SurfaceError::Platform("no document".into()))
}

/// Look up an element by id.
pub fn by_id(document: &Document, id: &str) -> Result<Element, SurfaceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingElement(format!("#{id}")))
}

/// First element matching a selector.
pub fn query(document: &Document, selector: &str) -> Result<Element, SurfaceError> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| SurfaceError::MissingElement(selector.to_string()))
}

/// All elements matching a selector, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(node_list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..node_list.length())
        .filter_map(|i| node_list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Show or hide an element through its inline `display` style.
pub fn set_shown(element: &Element, shown: bool) -> Result<(), SurfaceError> {
    let html: &HtmlElement = element
        .dyn_ref()
        .ok_or_else(|| SurfaceError::Platform("not an HTML element".into()))?;
    let style = html.style();
    if shown {
        style.remove_property("display").map_err(js_err)?;
    } else {
        style.set_property("display", "none").map_err(js_err)?;
    }
    Ok(())
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor-or-self matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}
