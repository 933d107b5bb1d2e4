//! Outbound retailer links.

#[cfg(test)]
#[path = "retailer_test.rs"]
mod retailer_test;

use crate::consts::{OUTBOUND_FEATURES, OUTBOUND_TARGET};

/// A validated retailer destination read from a card's `data-url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    url: String,
}

impl OutboundLink {
    /// Build a link from the raw attribute value; blank values open nothing.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Option<Self> {
        let url = raw?.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self { url: url.to_owned() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn target(&self) -> &'static str {
        OUTBOUND_TARGET
    }

    /// Features that keep the new context from reaching back into this page.
    #[must_use]
    pub fn features(&self) -> &'static str {
        OUTBOUND_FEATURES
    }
}
