//! Thin `web-sys` helpers shared by the page behaviours.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers keep selector queries, attribute reads and listener
//! registration in one place so each behaviour module reads as
//! "find elements, attach handler, apply decision".

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventInit, EventTarget, NodeList};

/// Human-readable text for a thrown JS value.
#[must_use]
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// All elements in `document` matching `selector`.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector}: {}", describe(&err));
            Vec::new()
        }
    }
}

/// All descendants of `root` matching `selector`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("bad selector {selector}: {}", describe(&err));
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", describe(&err));
            None
        }
    }
}

/// First element in `document` matching `selector`.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {}", describe(&err));
            None
        }
    }
}

/// Downcast an element to a concrete `web-sys` element type.
#[must_use]
pub fn cast<T: JsCast>(element: &Element) -> Option<T> {
    element.dyn_ref::<T>().cloned()
}

/// The element an event was dispatched from, cast to `T`.
#[must_use]
pub fn event_target<T: JsCast>(event: &Event) -> Option<T> {
    event.current_target().and_then(|t| t.dyn_ref::<T>().cloned())
}

/// Attach a passive listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event_type, callback).forget();
}

/// Attach a listener that may call `prevent_default`, for the page lifetime.
pub fn on_cancelable<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(target, event_type, EventListenerOptions::enable_prevent_default(), callback)
        .forget();
}

/// Fire a bubbling `input` event so other listeners see a programmatic edit.
pub fn dispatch_input(target: &Element) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = match Event::new_with_event_init_dict("input", &init) {
        Ok(event) => event,
        Err(err) => {
            log::warn!("could not create input event: {}", describe(&err));
            return;
        }
    };
    if let Err(err) = target.dispatch_event(&event) {
        log::warn!("input event dispatch failed: {}", describe(&err));
    }
}

/// Add or remove a class, logging (not failing) on DOM errors.
pub fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();
    let result = if present { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class update {class} failed: {}", describe(&err));
    }
}

/// Set an attribute, logging (not failing) on DOM errors.
pub fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::warn!("attribute update {name} failed: {}", describe(&err));
    }
}
