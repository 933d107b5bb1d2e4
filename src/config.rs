//! Page-level configuration: selectors, ids, timings, and geometry.
//!
//! DESIGN
//! ======
//! Every knob has a default that matches the storefront markup, so a page
//! with no `#site-config` block behaves exactly like the stock site. A page
//! may embed a JSON object to override individual fields; unnamed fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FLOAT_STAGGER_S, HEADER_OFFSET_PX, HOVER_GLOW_SHADOW, MENU_BREAKPOINT_PX, PRESS_FEEDBACK_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, RESIZE_DEBOUNCE_MS, THEME_STORAGE_KEY, THEME_TRANSITION_MS,
};
use crate::error::SiteError;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub theme_transition_ms: u32,
    pub theme_toggle_id: String,

    pub menu_id: String,
    pub menu_trigger_id: String,
    pub menu_close_selector: String,
    pub menu_breakpoint_px: f64,
    pub resize_debounce_ms: u32,

    pub retailer_selector: String,
    pub retailer_url_attribute: String,
    pub press_feedback_ms: u32,

    pub anchor_selector: String,
    pub header_offset_px: f64,

    pub reveal_selectors: Vec<String>,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    pub float_selector: String,
    pub float_stagger_s: f64,
    pub glow_selector: String,
    pub glow_shadow: String,

    pub retailers_section_id: String,
    pub preload_images: Vec<String>,
    /// Service worker script; `None` skips registration.
    pub service_worker_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            theme_transition_ms: THEME_TRANSITION_MS,
            theme_toggle_id: "theme-toggle".to_owned(),
            menu_id: "side-menu".to_owned(),
            menu_trigger_id: "hamburger-menu".to_owned(),
            menu_close_selector: ".close-side-menu".to_owned(),
            menu_breakpoint_px: MENU_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            retailer_selector: ".retailer-card[data-url]".to_owned(),
            retailer_url_attribute: "data-url".to_owned(),
            press_feedback_ms: PRESS_FEEDBACK_MS,
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            header_offset_px: HEADER_OFFSET_PX,
            reveal_selectors: vec![".feature-card".to_owned(), ".retailer-card".to_owned(), ".product-card".to_owned()],
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            float_selector: ".float-element".to_owned(),
            float_stagger_s: FLOAT_STAGGER_S,
            glow_selector: ".glass-panel".to_owned(),
            glow_shadow: HOVER_GLOW_SHADOW.to_owned(),
            retailers_section_id: "retailers".to_owned(),
            preload_images: vec!["images/logo.png".to_owned()],
            service_worker_url: Some("/sw.js".to_owned()),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block, keeping defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not a valid JSON object
    /// of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Comma-joined selector list for the reveal observer.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}
