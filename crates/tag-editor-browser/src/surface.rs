//! DOM implementation of the tag editor surface.
//!
//! Renders view tags, edit inputs, delete badges and width machines with the
//! same markup and classes the page template uses for server-rendered tags.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use tag_editor_core::{
    MAX_TAG_LEN, PageConfig, SurfaceError, SurfaceResult, TagId, TagSurface, TagText,
};

use crate::dom::{by_id, js_err, query, query_all, set_shown};

const BADGE_CLASSES: &str = "badge badge-pill badge-primary tag";
const WIDTH_MACHINE_CLASS: &str = "width-machine";

/// Browser-backed [`TagSurface`].
pub struct DomTagSurface {
    document: Document,
    config: Rc<PageConfig>,
}

impl DomTagSurface {
    pub fn new(document: Document, config: Rc<PageConfig>) -> Self {
        Self { document, config }
    }

    fn create(&self, tag: &str) -> Result<Element, SurfaceError> {
        self.document.create_element(tag).map_err(js_err)
    }

    fn hidden_input(&self) -> Result<HtmlInputElement, SurfaceError> {
        by_id(&self.document, &self.config.hidden_field_id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| SurfaceError::Platform("hidden field is not an input".into()))
    }

    /// Build `<span class="view-tag ..."><a href=...>label</a></span>`.
    fn view_tag_element(&self, id: TagId, label: &str) -> Result<Element, SurfaceError> {
        let span = self.create("span")?;
        span.set_id(&id.view_id());
        span.set_class_name(&format!("{} {}", self.config.view_tag_class, BADGE_CLASSES));

        let link = self.create("a")?;
        link.set_attribute("href", &self.config.listing_href(label))
            .map_err(js_err)?;
        link.set_text_content(Some(label));
        span.append_child(&link).map_err(js_err)?;
        Ok(span)
    }

    fn edit_input_element(&self, id: TagId) -> Result<Element, SurfaceError> {
        let input = self.create("input")?;
        input.set_id(&id.edit_id());
        let maxlength = MAX_TAG_LEN.to_string();
        for (name, value) in [
            ("type", "text"),
            ("maxlength", maxlength.as_str()),
            ("placeholder", "new tag"),
            ("spellcheck", "false"),
        ] {
            input.set_attribute(name, value).map_err(js_err)?;
        }
        input.set_class_name(&format!(
            "tag badge-pill badge-primary {}",
            self.config.tag_input_class
        ));
        Ok(input)
    }

    fn delete_badge_element(&self, id: TagId, text: &TagText) -> Result<Element, SurfaceError> {
        let span = self.create("span")?;
        span.set_id(&id.delete_id());
        span.set_class_name(&format!("{} {}", BADGE_CLASSES, self.config.delete_tag_class));
        let label = self.document.create_text_node(text.as_str());
        span.append_child(&label).map_err(js_err)?;

        let icon = self.create("span")?;
        icon.set_class_name("material-icons");
        icon.set_text_content(Some("cancel"));
        span.append_child(&icon).map_err(js_err)?;
        Ok(span)
    }

    /// Find a delete badge, including server-rendered ones whose id only
    /// shares the tag number.
    fn find_delete_badge(&self, id: TagId) -> Option<Element> {
        if let Some(el) = self.document.get_element_by_id(&id.delete_id()) {
            return Some(el);
        }
        let selector = format!(".{}", self.config.delete_tag_class);
        query_all(&self.document, &selector)
            .into_iter()
            .find(|el| TagId::from_dom_id(&el.id()) == Some(id))
    }

    fn remove_by_id(&self, dom_id: &str) -> SurfaceResult {
        by_id(&self.document, dom_id)?.remove();
        Ok(())
    }
}

impl TagSurface for DomTagSurface {
    fn set_view_visible(&mut self, visible: bool) -> SurfaceResult {
        let container = by_id(&self.document, &self.config.view_container_id)?;
        set_shown(&container, visible)
    }

    fn set_edit_visible(&mut self, visible: bool) -> SurfaceResult {
        let panel = by_id(&self.document, &self.config.edit_panel_id)?;
        set_shown(&panel, visible)
    }

    fn insert_edit_input(&mut self, id: TagId) -> SurfaceResult {
        let input = self.edit_input_element(id)?;
        match query(&self.document, &self.config.add_tag_selector) {
            Ok(add) => add.before_with_node_1(&input).map_err(js_err)?,
            Err(_) => {
                let panel = by_id(&self.document, &self.config.edit_panel_id)?;
                panel.append_child(&input).map_err(js_err)?;
            }
        }
        if let Some(html) = input.dyn_ref::<HtmlElement>() {
            html.focus().map_err(js_err)?;
        }
        Ok(())
    }

    fn remove_edit_input(&mut self, id: TagId) -> SurfaceResult {
        self.remove_by_id(&id.edit_id())
    }

    fn insert_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult {
        let span = self.view_tag_element(id, label)?;
        let list = by_id(&self.document, &self.config.view_tags_id)?;
        list.append_child(&span).map_err(js_err)?;
        Ok(())
    }

    fn update_view_tag(&mut self, id: TagId, label: &str) -> SurfaceResult {
        let link = query(&self.document, &format!("#{} a", id.view_id()))?;
        link.set_text_content(Some(label));
        link.set_attribute("href", &self.config.listing_href(label))
            .map_err(js_err)
    }

    fn remove_view_tag(&mut self, id: TagId) -> SurfaceResult {
        self.remove_by_id(&id.view_id())
    }

    fn insert_delete_badge(&mut self, id: TagId, text: &TagText) -> SurfaceResult {
        let badge = self.delete_badge_element(id, text)?;
        match by_id(&self.document, &self.config.new_tag_button_id) {
            Ok(new_tag) => new_tag.before_with_node_1(&badge).map_err(js_err),
            Err(_) => {
                let panel = by_id(&self.document, &self.config.edit_panel_id)?;
                panel.append_child(&badge).map_err(js_err)?;
                Ok(())
            }
        }
    }

    fn remove_delete_badge(&mut self, id: TagId) -> SurfaceResult {
        let badge = self
            .find_delete_badge(id)
            .ok_or_else(|| SurfaceError::MissingElement(format!("#{}", id.delete_id())))?;
        badge.remove();
        Ok(())
    }

    fn insert_width_machine(&mut self, id: TagId) -> SurfaceResult {
        let span = self.create("span")?;
        span.set_id(&id.width_id());
        span.set_attribute("aria-hidden", "true").map_err(js_err)?;
        span.set_class_name(&format!("{BADGE_CLASSES} {WIDTH_MACHINE_CLASS}"));
        span.set_attribute(
            "style",
            "position: absolute; visibility: hidden; white-space: pre;",
        )
        .map_err(js_err)?;
        span.set_text_content(Some("invisible"));

        let host = match query(&self.document, &self.config.entry_selector) {
            Ok(entry) => entry,
            Err(_) => self
                .document
                .body()
                .map(Element::from)
                .ok_or_else(|| SurfaceError::MissingElement("body".into()))?,
        };
        host.append_child(&span).map_err(js_err)?;
        Ok(())
    }

    fn fit_edit_input(&mut self, id: TagId, text: &str) -> SurfaceResult {
        let machine = by_id(&self.document, &id.width_id())?;
        machine.set_text_content(Some(text));
        let width = machine
            .dyn_ref::<HtmlElement>()
            .map(|el| el.offset_width())
            .unwrap_or_default();

        let input = by_id(&self.document, &id.edit_id())?;
        let input: &HtmlElement = input
            .dyn_ref()
            .ok_or_else(|| SurfaceError::Platform("edit input is not an HTML element".into()))?;
        input
            .style()
            .set_property("width", &format!("{width}px"))
            .map_err(js_err)
    }

    fn clear_width_machines(&mut self) -> SurfaceResult {
        for machine in query_all(&self.document, &format!(".{WIDTH_MACHINE_CLASS}")) {
            machine.remove();
        }
        Ok(())
    }

    fn set_hidden_value(&mut self, value: &str) -> SurfaceResult {
        self.hidden_input()?.set_value(value);
        Ok(())
    }
}
