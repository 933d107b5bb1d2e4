//! Progressive enhancement for the storefront landing page.
//!
//! This crate is compiled to WebAssembly and loaded by the static site. It
//! adds the page's interactive behavior: the light/dark theme toggle, the
//! slide-in side menu, outbound retailer links, smooth in-page scrolling,
//! one-shot reveal-on-scroll animation, and a few performance conveniences.
//!
//! All state transitions live in [`controller::SiteCore`], which has no browser
//! dependency and is unit-tested natively. The `web` module (behind the
//! `browser` feature) binds DOM events to the core and applies the
//! [`controller::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Controller state machine and the actions it emits |
//! | [`config`] | Selectors, timings, and geometry, overridable per page |
//! | [`theme`] | Theme preference resolution and persistence |
//! | [`menu`] | Side menu open/scroll-lock state |
//! | [`reveal`] | One-shot reveal bookkeeping |
//! | [`scroll`] | Anchor fragment parsing and scroll targets |
//! | [`retailer`] | Outbound retailer link validation |
//! | [`motion`] | Floating decoration stagger and play state |
//! | [`debounce`] | Trailing-edge debounce |
//! | [`lifecycle`] | Document ready-state checks for startup |
//! | [`consts`] | Built-in defaults |
//! | [`error`] | Binding errors |

pub mod config;
pub mod consts;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod motion;
pub mod retailer;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod web;

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A logger already installed by the embedding page is fine.
    let _ = console_log::init_with_level(level);
    web::boot();
}
