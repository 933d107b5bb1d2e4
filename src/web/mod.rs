//! Browser host: startup sequence and JS exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything in here needs a live `window`/`document` and is compiled only
//! with the `browser` feature. Each feature binds independently; a page
//! missing some markup simply loses that feature.

pub mod assets;
pub mod bind;
pub mod dom;
pub mod host;

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::controller::SiteCore;
use crate::error::{SiteError, or_disabled};
use crate::lifecycle::ReadyState;
use crate::web::host::{Host, MenuElements};

/// Start the controller now, or on `DOMContentLoaded` if the document is
/// still parsing.
pub fn boot() {
    if let Err(err) = try_boot() {
        log::warn!("storefront: startup failed: {err}");
    }
}

fn try_boot() -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if ReadyState::parse(&document.ready_state()).awaits_dom() {
        return dom::listen(&document, "DOMContentLoaded", |_| init());
    }
    init();
    Ok(())
}

fn init() {
    let host = match build_host() {
        Ok(host) => Rc::new(host),
        Err(err) => {
            log::warn!("storefront: no document to enhance: {err}");
            return;
        }
    };

    or_disabled("theme", bind::bind_theme(&host));
    or_disabled("menu", bind::bind_menu(&host));
    or_disabled("resize", bind::bind_resize(&host));
    or_disabled("retailers", bind::bind_retailers(&host));
    or_disabled("anchors", bind::bind_anchors(&host));
    or_disabled("reveal", bind::bind_reveal(&host));
    or_disabled("motion", bind::bind_motion(&host));
    or_disabled("visibility", bind::bind_visibility(&host));

    let (preload, worker) = {
        let core = host.core.borrow();
        (core.config().preload_images.clone(), core.config().service_worker_url.clone())
    };
    or_disabled("preload", assets::preload_images(&host.document, &preload));
    if let Some(url) = worker {
        or_disabled("service worker", assets::register_service_worker(&host.window, &host.document, url));
    }
    log::info!("storefront: controller ready");
}

fn build_host() -> Result<Host, SiteError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = load_config(&document);

    let menu = match (dom::by_id(&document, &config.menu_id), dom::by_id(&document, &config.menu_trigger_id)) {
        (Ok(panel), Ok(trigger)) => Some(MenuElements { panel, trigger }),
        _ => None,
    };
    let floats = or_disabled("motion", dom::query_all(&document, &config.float_selector));

    let mut host = Host::new(SiteCore::new(config), window, document);
    host.menu = menu;
    host.floats = floats;
    Ok(host)
}

/// Read the optional `#site-config` JSON block; bad JSON falls back to
/// defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("storefront: {err}; using defaults");
        SiteConfig::default()
    })
}

/// Smooth-scroll the retailer section into view. Exported for inline
/// `onclick` handlers in the page markup.
#[wasm_bindgen(js_name = scrollToRetailers)]
pub fn scroll_to_retailers() {
    let Ok(document) = dom::window().and_then(|w| dom::document(&w)) else {
        return;
    };
    let id = load_config(&document).retailers_section_id;
    let Some(section) = document.get_element_by_id(&id) else {
        log::debug!("scrollToRetailers: no #{id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}
