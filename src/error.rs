//! Error type for controller wiring.
//!
//! Nothing here is fatal: the browser host logs each error and leaves the
//! affected feature unbound.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while binding or running one storefront feature.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// An element the feature depends on is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The `#site-config` block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Unwrap one feature's result, or log why the feature is off and fall back
/// to the empty value. Missing markup is routine, so it logs at debug.
pub fn or_disabled<T: Default>(feature: &str, result: Result<T, SiteError>) -> T {
    match result {
        Ok(value) => value,
        Err(SiteError::MissingElement(what)) => {
            log::debug!("{feature}: disabled, missing {what}");
            T::default()
        }
        Err(err) => {
            log::warn!("{feature}: {err}");
            T::default()
        }
    }
}
