//! Critical-image preload hints and service worker registration.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlLinkElement, Window};

use crate::error::SiteError;
use crate::lifecycle::ReadyState;
use crate::web::dom::listen;

/// Append a `<link rel="preload" as="image">` to `<head>` for each path.
pub fn preload_images(document: &Document, paths: &[String]) -> Result<(), SiteError> {
    let head = document.head().ok_or_else(|| SiteError::MissingElement("head".to_owned()))?;
    for path in paths {
        let link = document
            .create_element("link")?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|el| SiteError::Js(format!("<{}> is not a link element", el.tag_name())))?;
        link.set_rel("preload");
        link.set_as("image");
        link.set_href(path);
        head.append_child(&link)?;
    }
    log::debug!("assets: preloading {} images", paths.len());
    Ok(())
}

/// Register the service worker once the page has loaded. Failure only
/// costs offline caching, so it is logged and dropped.
pub fn register_service_worker(window: &Window, document: &Document, script_url: String) -> Result<(), SiteError> {
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        log::debug!("assets: service workers unsupported");
        return Ok(());
    }

    if ReadyState::parse(&document.ready_state()).load_fired() {
        spawn_registration(window, script_url);
        return Ok(());
    }
    let on_load = window.clone();
    let mut pending = Some(script_url);
    listen(window, "load", move |_| {
        if let Some(url) = pending.take() {
            spawn_registration(&on_load, url);
        }
    })
}

fn spawn_registration(window: &Window, script_url: String) {
    let promise = window.navigator().service_worker().register(&script_url);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::debug!("assets: service worker registered from {script_url}"),
            Err(err) => log::info!("assets: service worker registration failed: {err:?}"),
        }
    });
}
