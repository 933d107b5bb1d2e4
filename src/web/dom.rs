//! Thin `web-sys` helpers shared by the binders.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".to_owned()))
}

pub fn document(window: &Window) -> Result<Document, SiteError> {
    window.document().ok_or_else(|| SiteError::MissingElement("document".to_owned()))
}

pub fn by_id(document: &Document, id: &str) -> Result<HtmlElement, SiteError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

pub fn query(document: &Document, selector: &str) -> Result<HtmlElement, SiteError> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(selector.to_owned()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let result = if value.is_empty() {
        el.style().remove_property(property).map(|_| ())
    } else {
        el.style().set_property(property, value)
    };
    if let Err(err) = result {
        log::warn!("dom: failed to set {property}: {err:?}");
    }
}

/// Whether the event's target sits inside `container` (inclusive).
pub fn event_within(event: &Event, container: &Element) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    container.contains(target.as_ref())
}

/// Register `handler` for the page lifetime.
pub fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
