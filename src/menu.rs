//! Slide-in side menu state.
//!
//! The `open` class on the panel and the body scroll lock are both derived
//! from the single `open` flag, so they cannot disagree.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

/// Where a document click landed relative to the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub in_menu: bool,
    pub in_trigger: bool,
}

impl ClickTarget {
    #[must_use]
    pub fn outside() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_outside(self) -> bool {
        !self.in_menu && !self.in_trigger
    }
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Body scroll is locked exactly while the menu is open.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.open
    }

    /// Value for `body.style.overflow`.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// Set the open flag; returns `true` when the state changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// A click outside both the panel and its trigger dismisses an open menu.
    #[must_use]
    pub fn should_dismiss(self, target: ClickTarget) -> bool {
        self.open && target.is_outside()
    }

    /// An open menu is force-closed once the viewport grows past `breakpoint`.
    #[must_use]
    pub fn should_close_for_width(self, width: f64, breakpoint: f64) -> bool {
        self.open && width > breakpoint
    }
}
