//! Light/dark theme preference.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggling writes back to
//! `localStorage` and updates that attribute. The browser halves are no-ops
//! outside the `browser` feature so the resolution rules stay testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "browser")]
use crate::consts::{PREFERS_DARK_QUERY, THEME_ATTRIBUTE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than exactly `"light"` or
    /// `"dark"` is treated as no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Pick the startup theme: a valid stored value wins, then the
    /// platform color-scheme hint, then light.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }
}

/// Read the raw stored preference under `key`.
pub fn read_stored(key: &str) -> Option<String> {
    #[cfg(feature = "browser")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = key;
        None
    }
}

/// Whether the platform asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "browser"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "browser")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("theme: failed to set {THEME_ATTRIBUTE}: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` under `key`. Storage may be unavailable (private mode,
/// disabled cookies); that only loses the preference.
pub fn persist(key: &str, theme: Theme) {
    #[cfg(feature = "browser")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("theme: localStorage unavailable, preference not saved");
            return;
        };
        if let Err(err) = storage.set_item(key, theme.as_str()) {
            log::warn!("theme: failed to persist preference: {err:?}");
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (key, theme);
    }
}
