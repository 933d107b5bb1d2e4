//! Event binding, one function per controller.
//!
//! Each binder checks for the markup it needs and returns
//! [`SiteError::MissingElement`] when something is absent; the caller logs
//! that and carries on with the remaining features.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;
use crate::menu::ClickTarget;
use crate::motion::stagger_delay;
use crate::reveal::RevealKey;
use crate::scroll::fragment_id;
use crate::theme;
use crate::web::dom::{self, by_id, event_within, listen, query_all, set_style};
use crate::web::host::Host;

pub fn bind_theme(host: &Rc<Host>) -> Result<(), SiteError> {
    let stored = theme::read_stored(&host.core.borrow().config().theme_storage_key);
    let prefers_dark = theme::prefers_dark();
    host.dispatch(None, None, |core| core.init_theme(stored.as_deref(), prefers_dark));

    let toggle_id = host.core.borrow().config().theme_toggle_id.clone();
    let toggle = by_id(&host.document, &toggle_id)?;
    let host = Rc::clone(host);
    listen(&toggle, "click", move |_| host.dispatch(None, None, |core| core.toggle_theme()))
}

pub fn bind_menu(host: &Rc<Host>) -> Result<(), SiteError> {
    let Some(menu) = &host.menu else {
        return Err(SiteError::MissingElement("side menu".to_owned()));
    };
    let close_selector = host.core.borrow().config().menu_close_selector.clone();
    let close = dom::query(&host.document, &close_selector)?;

    let opener = Rc::clone(host);
    listen(&menu.trigger, "click", move |_| opener.dispatch(None, None, |core| core.open_menu()))?;

    let closer = Rc::clone(host);
    listen(&close, "click", move |_| closer.dispatch(None, None, |core| core.close_menu()))?;

    // Registered once here, never per open.
    let outside = Rc::clone(host);
    listen(&host.document, "click", move |event| {
        let Some(menu) = &outside.menu else {
            return;
        };
        let target = ClickTarget {
            in_menu: event_within(&event, &menu.panel),
            in_trigger: event_within(&event, &menu.trigger),
        };
        outside.dispatch(Some(&event), None, |core| core.on_document_click(target));
    })
}

pub fn bind_resize(host: &Rc<Host>) -> Result<(), SiteError> {
    let resize_host = Rc::clone(host);
    listen(&host.window, "resize", move |_| {
        let ticket = resize_host.core.borrow_mut().on_resize();
        let settled = Rc::clone(&resize_host);
        resize_host.resize.call(move || {
            let width = settled.window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            settled.dispatch(None, None, |core| core.on_resize_settled(ticket, width));
        });
    })
}

pub fn bind_retailers(host: &Rc<Host>) -> Result<(), SiteError> {
    let (selector, attribute) = {
        let core = host.core.borrow();
        (core.config().retailer_selector.clone(), core.config().retailer_url_attribute.clone())
    };
    let cards = query_all(&host.document, &selector)?;
    log::debug!("retailer: binding {} cards", cards.len());
    for card in cards {
        let host = Rc::clone(host);
        let attribute = attribute.clone();
        let target = card.clone();
        listen(&target, "click", move |event| {
            let url = card.get_attribute(&attribute);
            host.dispatch(Some(&event), Some(&card), |core| core.on_retailer_click(url.as_deref()));
        })?;
    }
    Ok(())
}

pub fn bind_anchors(host: &Rc<Host>) -> Result<(), SiteError> {
    let selector = host.core.borrow().config().anchor_selector.clone();
    for link in query_all(&host.document, &selector)? {
        let host = Rc::clone(host);
        let target = link.clone();
        listen(&target, "click", move |event| {
            let offset_top = link
                .get_attribute("href")
                .as_deref()
                .and_then(fragment_id)
                .and_then(|id| by_id(&host.document, id).ok())
                .map(|el| f64::from(el.offset_top()));
            host.dispatch(Some(&event), None, |core| core.on_anchor_click(offset_top));
        })?;
    }
    Ok(())
}

pub fn bind_reveal(host: &Rc<Host>) -> Result<(), SiteError> {
    let (selector, threshold, root_margin) = {
        let core = host.core.borrow();
        let config = core.config();
        (config.reveal_selector(), config.reveal_threshold, config.reveal_root_margin.clone())
    };
    let targets = query_all(&host.document, &selector)?;

    let observed = Rc::clone(host);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(key) = observed.key_of(&entry.target()) else {
                continue;
            };
            let (intersecting, ratio) = (entry.is_intersecting(), entry.intersection_ratio());
            observed.dispatch(None, None, |core| core.on_intersection(key, intersecting, ratio));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let mut watched = host.reveal_targets.borrow_mut();
    for (index, el) in targets.into_iter().enumerate() {
        let Ok(key) = RevealKey::try_from(index) else {
            break;
        };
        host.core.borrow_mut().watch(key);
        observer.observe(&el);
        watched.push(el.into());
    }
    log::debug!("reveal: watching {} elements", watched.len());
    drop(watched);
    *host.observer.borrow_mut() = Some(observer);
    Ok(())
}

pub fn bind_motion(host: &Rc<Host>) -> Result<(), SiteError> {
    let (step, glow_selector, shadow) = {
        let core = host.core.borrow();
        let config = core.config();
        (config.float_stagger_s, config.glow_selector.clone(), config.glow_shadow.clone())
    };
    for (index, el) in (0u32..).zip(&host.floats) {
        set_style(el, "animation-delay", &stagger_delay(index, step));
    }

    for panel in query_all(&host.document, &glow_selector)? {
        let enter = panel.clone();
        let shadow = shadow.clone();
        listen(&panel, "mouseenter", move |_| set_style(&enter, "box-shadow", &shadow))?;
        let leave = panel.clone();
        listen(&panel, "mouseleave", move |_| set_style(&leave, "box-shadow", ""))?;
    }
    Ok(())
}

pub fn bind_visibility(host: &Rc<Host>) -> Result<(), SiteError> {
    let visible = Rc::clone(host);
    listen(&host.document, "visibilitychange", move |_| {
        let hidden = visible.document.hidden();
        visible.dispatch(None, None, |core| core.on_visibility_change(hidden));
    })
}
