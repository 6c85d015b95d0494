//! Mounting the tag editor and page widgets onto a document.
//!
//! All listeners are delegated from the document, since tag inputs and delete
//! badges come and go while the page is open. Dropping the [`TagPage`]
//! removes every listener.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use tag_editor_core::{
    FieldToggle, NewEntryTags, PageConfig, SaveOutcome, SurfaceError, TagEditor, TagEntry,
    TagError, TagId, TagIdAllocator, TagList, TagText, TogglePair,
};

use crate::dom::{by_id, closest, document, event_element, query_all, set_shown};
use crate::events::{handle_single_line_keydown, handle_tag_keydown};
use crate::surface::DomTagSurface;
use crate::widgets::{apply_toggle_by_id, expand_all_textareas, expand_textarea, update_file_label};

pub type DomTagEditor = TagEditor<DomTagSurface>;

/// Callback receiving the hidden-field value after each save.
///
/// Runs after the editor borrow is released, so it may call back into the
/// page.
pub type PersistHook = Box<dyn FnMut(&str)>;

type Shared<T> = Rc<RefCell<T>>;

/// Errors from saving through a [`TagPage`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Another handler is using the editor (e.g. a save from inside the
    /// persist hook).
    #[error("tag editor is busy")]
    Busy,

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// A mounted page: editor state plus the listeners driving it.
pub struct TagPage {
    document: Document,
    config: Rc<PageConfig>,
    editor: Shared<DomTagEditor>,
    new_entry: Option<Shared<NewEntryTags>>,
    persist: Shared<Option<PersistHook>>,
    _listeners: Vec<EventListener>,
}

impl TagPage {
    /// Read the current page, then wire up every listener.
    pub fn mount(config: PageConfig, on_persist: Option<PersistHook>) -> Result<Self, SurfaceError> {
        let document = document()?;
        let window = web_sys::window().ok_or_else(|| SurfaceError::Platform("no window".into()))?;
        let config = Rc::new(config);

        let (tags, ids) = read_existing_tags(&document, &config);
        tracing::debug!(tags = tags.len(), next_id = %ids.peek(), "mounting tag page");

        let surface = DomTagSurface::new(document.clone(), config.clone());
        let editor = Rc::new(RefCell::new(TagEditor::new(surface, tags, ids)));
        let persist = Rc::new(RefCell::new(on_persist));

        let new_entry = document
            .get_element_by_id(&config.new_entry_form_id)
            .map(|_| Rc::new(RefCell::new(NewEntryTags::new(read_hidden(&document, &config)))));

        let toggles: Shared<Vec<(TogglePair, FieldToggle)>> = Rc::new(RefCell::new(
            config
                .toggles
                .iter()
                .cloned()
                .map(|pair| (pair, FieldToggle::default()))
                .collect(),
        ));

        initial_state(&document, &config, &toggles.borrow());

        let mut listeners = Vec::new();

        listeners.push({
            let document_c = document.clone();
            let config = config.clone();
            let editor = editor.clone();
            let new_entry = new_entry.clone();
            let persist = persist.clone();
            let toggles = toggles.clone();
            EventListener::new(&document, "click", move |event| {
                let Some(target) = event_element(event) else {
                    return;
                };
                on_click(
                    &document_c,
                    &config,
                    &target,
                    &editor,
                    new_entry.as_ref(),
                    &persist,
                    &toggles,
                );
            })
        });

        listeners.push({
            let config = config.clone();
            EventListener::new_with_options(
                &document,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(target) = event_element(event) else {
                        return;
                    };
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if target.class_list().contains(&config.tag_input_class) {
                        handle_tag_keydown(key_event);
                    } else if config.single_line_ids.iter().any(|id| *id == target.id()) {
                        handle_single_line_keydown(key_event);
                    }
                    expand_if_textarea(&target);
                },
            )
        });

        listeners.push({
            let config = config.clone();
            let editor = editor.clone();
            EventListener::new(&document, "input", move |event| {
                let Some(target) = event_element(event) else {
                    return;
                };
                if target.class_list().contains(&config.tag_input_class) {
                    on_tag_input(&target, &editor);
                }
                expand_if_textarea(&target);
            })
        });

        listeners.push(EventListener::new(&document, "mousedown", |event| {
            if let Some(target) = event_element(event) {
                expand_if_textarea(&target);
            }
        }));

        // blur does not bubble, focusout does.
        if let Some(new_entry) = new_entry.clone() {
            let document_c = document.clone();
            let config = config.clone();
            listeners.push(EventListener::new(&document, "focusout", move |event| {
                let Some(target) = event_element(event) else {
                    return;
                };
                let in_form = closest(&target, &format!("#{}", config.new_entry_form_id)).is_some();
                if !in_form || !target.class_list().contains(&config.tag_input_class) {
                    return;
                }
                let Some(input) = target.dyn_ref::<HtmlInputElement>() else {
                    return;
                };
                let Some(id) = TagId::from_dom_id(&target.id()) else {
                    return;
                };
                let Ok(mut tags) = new_entry.try_borrow_mut() else {
                    tracing::warn!("new entry tags busy, dropping blur");
                    return;
                };
                if tags.on_input_blur(id, &input.value()) {
                    write_hidden(&document_c, &config, tags.value());
                }
            }));
        }

        {
            let document_c = document.clone();
            listeners.push(EventListener::new(&document, "change", move |event| {
                let Some(target) = event_element(event) else {
                    return;
                };
                if !target.class_list().contains("custom-file-input") {
                    return;
                }
                if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                    if let Err(err) = update_file_label(&document_c, input) {
                        tracing::warn!(%err, "failed to update file label");
                    }
                }
            }));
        }

        {
            let document_c = document.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                expand_all_textareas(&document_c);
            }));
        }

        Ok(Self {
            document,
            config,
            editor,
            new_entry,
            persist,
            _listeners: listeners,
        })
    }

    /// Shared handle to the editor.
    pub fn editor(&self) -> Shared<DomTagEditor> {
        self.editor.clone()
    }

    /// Whether the page is the new-entry form.
    pub fn is_new_entry(&self) -> bool {
        self.new_entry.is_some()
    }

    /// Current hidden-field value as the page would submit it.
    ///
    /// While a handler holds the editor, the field is read from the page.
    pub fn hidden_value(&self) -> String {
        let value = match &self.new_entry {
            Some(tags) => tags.try_borrow().ok().map(|tags| tags.value().to_string()),
            None => self.editor.try_borrow().ok().map(|ed| ed.hidden_value()),
        };
        value.unwrap_or_else(|| read_hidden(&self.document, &self.config))
    }

    /// Save the edit panel, then hand the result to the persist hook.
    pub fn save(&self) -> Result<SaveOutcome, SaveError> {
        let outcome = {
            let mut ed = self.editor.try_borrow_mut().map_err(|_| SaveError::Busy)?;
            ed.save()?
        };
        run_persist(&self.persist, &outcome.hidden);
        Ok(outcome)
    }
}

/// Build the tag list from the view tags the server rendered.
///
/// Falls back to the hidden field when the page has no view tags. The id
/// allocator starts past both the tag count and the highest rendered id.
pub fn read_existing_tags(document: &Document, config: &PageConfig) -> (TagList, TagIdAllocator) {
    let views = query_all(document, &format!(".{}", config.view_tag_class));
    if views.is_empty() {
        return TagList::parse(&read_hidden(document, config));
    }

    let mut entries = Vec::with_capacity(views.len());
    let mut max_id = 0u32;
    for (idx, view) in views.iter().enumerate() {
        let id = TagId::from_dom_id(&view.id()).unwrap_or(TagId(idx as u32 + 1));
        max_id = max_id.max(id.0);
        let text = view.text_content().unwrap_or_default();
        match TagText::from_rendered(&text) {
            Some(text) => entries.push(TagEntry { id, text }),
            None => tracing::warn!(%id, text = %text, "ignoring unusable rendered tag"),
        }
    }
    let seed = views.len().max(max_id as usize);
    (TagList::from_entries(entries), TagIdAllocator::new(seed))
}

fn read_hidden(document: &Document, config: &PageConfig) -> String {
    by_id(document, &config.hidden_field_id)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn write_hidden(document: &Document, config: &PageConfig, value: &str) {
    match by_id(document, &config.hidden_field_id)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        Some(input) => input.set_value(value),
        None => tracing::warn!(id = %config.hidden_field_id, "hidden tag field missing"),
    }
}

fn initial_state(document: &Document, config: &PageConfig, toggles: &[(TogglePair, FieldToggle)]) {
    expand_all_textareas(document);

    if let Some(panel) = document.get_element_by_id(&config.edit_panel_id) {
        let _ = set_shown(&panel, false);
    }

    for (pair, toggle) in toggles {
        if let Err(err) = apply_toggle_by_id(document, &pair.button_id, &pair.field_id, toggle.state())
        {
            tracing::trace!(%err, button = %pair.button_id, "toggle not on this page");
        }
    }
}

fn on_click(
    document: &Document,
    config: &PageConfig,
    target: &Element,
    editor: &Shared<DomTagEditor>,
    new_entry: Option<&Shared<NewEntryTags>>,
    persist: &Shared<Option<PersistHook>>,
    toggles: &Shared<Vec<(TogglePair, FieldToggle)>>,
) {
    let hit = |selector: &str| closest(target, selector);

    if let Some(new_entry) = new_entry {
        let separator = format!("#{} #{}", config.new_entry_form_id, config.new_tag_button_id);
        if hit(&separator).is_some() {
            let mut tags = new_entry.borrow_mut();
            if tags.on_separator_click() {
                write_hidden(document, config, tags.value());
            }
        }
    }

    let Ok(mut ed) = editor.try_borrow_mut() else {
        tracing::warn!("tag editor busy, dropping click");
        return;
    };

    if hit(&format!("#{}", config.edit_button_id)).is_some() {
        ed.toggle_edit();
    }

    let mut saved = None;
    if hit(&format!("#{}", config.save_button_id)).is_some() {
        match ed.save() {
            Ok(outcome) => saved = Some(outcome.hidden),
            Err(err) => tracing::warn!(%err, "save ignored"),
        }
    }

    if let Some(badge) = hit(&format!(".{}", config.delete_tag_class)) {
        match TagId::from_dom_id(&badge.id()) {
            Some(id) => {
                if let Err(err) = ed.delete(id) {
                    tracing::warn!(%err, "delete ignored");
                }
            }
            None => tracing::warn!(badge = %badge.id(), "delete badge without tag number"),
        }
    }

    if hit(&config.add_tag_selector).is_some() {
        ed.add_new_tag();
    }
    drop(ed);

    if let Some(hidden) = saved {
        run_persist(persist, &hidden);
    }

    for (pair, toggle) in toggles.borrow_mut().iter_mut() {
        if hit(&format!("#{}", pair.button_id)).is_some() {
            let state = toggle.toggle();
            if let Err(err) = apply_toggle_by_id(document, &pair.button_id, &pair.field_id, state) {
                tracing::warn!(%err, "toggle failed");
            }
        }
    }
}

fn run_persist(persist: &Shared<Option<PersistHook>>, hidden: &str) {
    let Ok(mut hook) = persist.try_borrow_mut() else {
        tracing::warn!("persist hook re-entered, dropping save");
        return;
    };
    match hook.as_mut() {
        Some(hook) => hook(hidden),
        None => tracing::debug!("no persist hook installed, tags stay in the form"),
    }
}

fn on_tag_input(target: &Element, editor: &Shared<DomTagEditor>) {
    let Some(id) = TagId::from_dom_id(&target.id()) else {
        return;
    };
    let Some(input) = target.dyn_ref::<HtmlInputElement>() else {
        return;
    };
    let Ok(mut ed) = editor.try_borrow_mut() else {
        tracing::warn!("tag editor busy, dropping input");
        return;
    };
    if let Err(err) = ed.rename(id, &input.value()) {
        tracing::debug!(%err, "input on a tag that is not being edited");
    }
}

fn expand_if_textarea(target: &Element) {
    if !target.has_attribute(tag_editor_core::EXPANDABLE_ATTR) || target.tag_name() != "TEXTAREA" {
        return;
    }
    if let Some(textarea) = target.dyn_ref::<HtmlElement>() {
        if let Err(err) = expand_textarea(textarea) {
            tracing::warn!(%err, "failed to expand textarea");
        }
    }
}
