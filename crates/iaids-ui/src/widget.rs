//! Attachable multi-select widget that drives real DOM nodes.
//!
//! # Design
//! - Attach explicitly to one host element; nothing scans the page.
//! - The host's native `select` donates its attributes (`id` becomes `data-id`)
//!   and its options to a new control element.
//! - Every state change rebuilds the tag row and re-syncs option `selected`
//!   state from [`Selection`]; there is no incremental diffing.
//! - Listeners are owned by the widget and removed when it is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlOptionElement, Node};

use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::interaction::{
    ChangeNotifier, ClickIntent, ClickTarget, TAG_VALUE_ATTRIBUTE, option_click, remove_click,
};
use crate::selection::{Change, Selection};
use crate::view::{TagDescriptor, copied_attributes, project_options, project_tags};

/// Multi-value selector bound to a host element.
pub struct MultiSelectWidget {
    inner: Rc<Inner>,
    _option_clicks: EventListener,
    _remove_clicks: EventListener,
}

struct Inner {
    config: WidgetConfig,
    document: Document,
    tags: Element,
    control: Element,
    selection: RefCell<Selection>,
    on_change: ChangeNotifier,
}

impl MultiSelectWidget {
    /// Build the widget subtree inside `host` and start listening for clicks.
    ///
    /// A host without a `select` child produces an empty control.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid, the host is not
    /// attached to a document, or the browser rejects a DOM call.
    pub fn attach(host: &Element, config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let document = host
            .owner_document()
            .ok_or(WidgetError::MissingGlobal { name: "document" })?;

        let tags = create_element(&document, "div")?;
        add_class(&tags, &config.tags_class)?;
        host.append_child(&tags)
            .map_err(|err| WidgetError::dom("append_child", &err))?;

        let control = build_control(&document, host, &config)?;
        host.append_child(&control)
            .map_err(|err| WidgetError::dom("append_child", &err))?;

        let inner = Rc::new(Inner {
            config,
            document,
            tags,
            control,
            selection: RefCell::new(Selection::new()),
            on_change: ChangeNotifier::default(),
        });
        inner.render()?;

        let option_clicks = {
            let weak = Rc::downgrade(&inner);
            EventListener::new(&inner.control, "click", move |event| {
                with_inner(&weak, |inner| inner.handle_option_click(event));
            })
        };
        let remove_clicks = {
            let weak = Rc::downgrade(&inner);
            EventListener::new_with_options(
                &inner.tags,
                "click",
                EventListenerOptions::run_in_capture_phase(),
                move |event| {
                    with_inner(&weak, |inner| inner.handle_remove_click(event));
                },
            )
        };

        Ok(Self {
            inner,
            _option_clicks: option_clicks,
            _remove_clicks: remove_clicks,
        })
    }

    /// Select `value` if it is not already selected.
    ///
    /// # Errors
    ///
    /// Returns an error when re-rendering fails.
    pub fn add(&self, value: &str) -> Result<Change> {
        self.inner.add(value)
    }

    /// Deselect `value` if it is selected.
    ///
    /// # Errors
    ///
    /// Returns an error when re-rendering fails.
    pub fn remove(&self, value: &str) -> Result<Change> {
        self.inner.remove(value)
    }

    /// Flip the selection state of `value`.
    ///
    /// # Errors
    ///
    /// Returns an error when re-rendering fails.
    pub fn toggle(&self, value: &str) -> Result<Change> {
        self.inner.toggle(value)
    }

    /// Re-project the current selection onto the tag row and the options.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser rejects a DOM call.
    pub fn render(&self) -> Result<()> {
        self.inner.render()
    }

    /// Selected values in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.inner.selection.borrow().values().to_vec()
    }

    /// Register a callback invoked with the selected values after every change.
    ///
    /// Replaces any previously registered callback. No DOM event is dispatched.
    pub fn set_on_change(&self, observer: impl Fn(&[String]) + 'static) {
        self.inner.on_change.set(observer);
    }

    /// Element holding the rendered tags.
    #[must_use]
    pub fn tags_element(&self) -> &Element {
        &self.inner.tags
    }

    /// Element holding the options.
    #[must_use]
    pub fn control_element(&self) -> &Element {
        &self.inner.control
    }
}

impl Inner {
    fn add(&self, value: &str) -> Result<Change> {
        let change = self.selection.borrow_mut().add(value);
        self.settle(change)
    }

    fn remove(&self, value: &str) -> Result<Change> {
        let change = self.selection.borrow_mut().remove(value);
        self.settle(change)
    }

    fn toggle(&self, value: &str) -> Result<Change> {
        let change = self.selection.borrow_mut().toggle(value);
        self.settle(change)
    }

    fn settle(&self, change: Change) -> Result<Change> {
        if change.is_changed() {
            self.render()?;
            let values = self.selection.borrow().values().to_vec();
            self.on_change.notify(&values);
        }
        Ok(change)
    }

    fn render(&self) -> Result<()> {
        let options = self.option_elements()?;
        let pairs: Vec<(String, String)> = options
            .iter()
            .map(|option| (option.value(), option.text()))
            .collect();
        let borrowed = || pairs.iter().map(|(value, label)| (value.as_str(), label.as_str()));
        let selection = self.selection.borrow();

        for (option, descriptor) in options.iter().zip(project_options(borrowed(), &selection)) {
            sync_option(option, descriptor.selected)?;
        }

        self.tags.set_text_content(None);
        for tag in project_tags(&selection, borrowed()) {
            let element = self.create_tag(&tag)?;
            self.tags
                .append_child(&element)
                .map_err(|err| WidgetError::dom("append_child", &err))?;
        }
        Ok(())
    }

    fn option_elements(&self) -> Result<Vec<HtmlOptionElement>> {
        let list = self
            .control
            .query_selector_all("option")
            .map_err(|err| WidgetError::dom("query_selector_all", &err))?;
        Ok((0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<HtmlOptionElement>().ok())
            .collect())
    }

    fn create_tag(&self, tag: &TagDescriptor) -> Result<Element> {
        let element = create_element(&self.document, "div")?;
        add_class(&element, &self.config.tag_class)?;
        set_attribute(&element, TAG_VALUE_ATTRIBUTE, &tag.value)?;
        element.set_text_content(Some(tag.text()));

        let icon = create_element(&self.document, &self.config.remove_icon_element)?;
        add_class(&icon, &self.config.remove_icon_class)?;
        set_attribute(&icon, "key", &self.config.remove_icon_key)?;
        set_attribute(&icon, "role", "button")?;
        set_attribute(&icon, "aria-label", &tag.remove_label())?;
        element
            .append_child(&icon)
            .map_err(|err| WidgetError::dom("append_child", &err))?;
        Ok(element)
    }

    fn handle_option_click(&self, event: &Event) {
        let target = ScopedElement::from_event(event, &self.control);
        if let Some(intent) = option_click(target.as_ref()) {
            self.dispatch(&intent);
        }
    }

    fn handle_remove_click(&self, event: &Event) {
        let target = ScopedElement::from_event(event, &self.tags);
        if let Some(intent) = remove_click(target.as_ref(), &self.config) {
            self.dispatch(&intent);
        }
    }

    fn dispatch(&self, intent: &ClickIntent) {
        let change = intent.apply(&mut self.selection.borrow_mut());
        if let Err(err) = self.settle(change) {
            report(&err);
        }
    }
}

/// Event target element whose ancestor lookups stop at the listening container.
struct ScopedElement<'a> {
    element: Element,
    scope: &'a Element,
}

impl<'a> ScopedElement<'a> {
    fn from_event(event: &Event, scope: &'a Element) -> Option<Self> {
        let element = event.target()?.dyn_into::<Element>().ok()?;
        Some(Self { element, scope })
    }
}

impl ClickTarget for ScopedElement<'_> {
    fn closest(&self, selector: &str) -> Option<Self> {
        let found = self.element.closest(selector).ok().flatten()?;
        let node: &Node = &found;
        self.scope.contains(Some(node)).then_some(Self {
            element: found,
            scope: self.scope,
        })
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn option_value(&self) -> String {
        self.element.dyn_ref::<HtmlOptionElement>().map_or_else(
            || self.attribute("value").unwrap_or_default(),
            HtmlOptionElement::value,
        )
    }
}

fn with_inner(weak: &Weak<Inner>, action: impl FnOnce(&Inner)) {
    if let Some(inner) = weak.upgrade() {
        action(inner.as_ref());
    }
}

fn build_control(document: &Document, host: &Element, config: &WidgetConfig) -> Result<Element> {
    let control = create_element(document, &config.control_element)?;
    let source = host
        .query_selector("select")
        .map_err(|err| WidgetError::dom("query_selector", &err))?;

    if let Some(source) = &source {
        let attributes = source.attributes();
        let pairs: Vec<(String, String)> = (0..attributes.length())
            .filter_map(|idx| attributes.item(idx))
            .map(|attribute| (attribute.name(), attribute.value()))
            .collect();
        let borrowed = pairs.iter().map(|(name, value)| (name.as_str(), value.as_str()));
        for (name, value) in copied_attributes(borrowed) {
            set_attribute(&control, &name, &value)?;
        }
    }

    if config.button_slot {
        let button = create_element(document, "div")?;
        set_attribute(&button, "slot", "button")?;
        set_attribute(&button, "behavior", "button")?;
        control
            .prepend_with_node_1(&button)
            .map_err(|err| WidgetError::dom("prepend", &err))?;
    }

    if let Some(source) = source {
        let options = source
            .query_selector_all("option")
            .map_err(|err| WidgetError::dom("query_selector_all", &err))?;
        for idx in 0..options.length() {
            if let Some(option) = options.item(idx) {
                control
                    .append_child(&option)
                    .map_err(|err| WidgetError::dom("append_child", &err))?;
            }
        }
    }
    Ok(control)
}

fn sync_option(option: &HtmlOptionElement, selected: bool) -> Result<()> {
    if selected {
        set_attribute(option, "selected", "")?;
    } else {
        option
            .remove_attribute("selected")
            .map_err(|err| WidgetError::dom("remove_attribute", &err))?;
    }
    option.set_selected(selected);
    Ok(())
}

fn create_element(document: &Document, name: &str) -> Result<Element> {
    document
        .create_element(name)
        .map_err(|err| WidgetError::dom("create_element", &err))
}

fn add_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|err| WidgetError::dom("class_list.add", &err))
}

fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|err| WidgetError::dom("set_attribute", &err))
}

fn report(err: &WidgetError) {
    match err {
        WidgetError::Dom { operation, detail } => {
            console::error!("multi-select render failed", *operation, detail.as_str());
        }
        other => console::error!("multi-select render failed", other.to_string()),
    }
}
