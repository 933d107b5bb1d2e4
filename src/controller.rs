//! Controller state machine.
//!
//! ARCHITECTURE
//! ============
//! `SiteCore` owns every piece of mutable UI state (theme, menu, reveal set,
//! resize debounce) and turns each browser event into a list of [`Action`]s.
//! It never touches the DOM. The `web` host feeds events in and applies the
//! actions, which keeps all of the behavior testable without a browser.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SiteConfig;
use crate::debounce::DebounceGate;
use crate::menu::{ClickTarget, MenuState};
use crate::motion::PlayState;
use crate::retailer::OutboundLink;
use crate::reveal::{RevealKey, RevealSet};
use crate::scroll::scroll_top_for;
use crate::theme::Theme;

/// Effects requested by the core for the host to carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Set `data-theme` on `<html>`.
    ApplyTheme(Theme),
    /// Write the theme to `localStorage`.
    PersistTheme(Theme),
    /// Put the transition style on `<body>` and clear it after `duration_ms`.
    ThemeTransition { duration_ms: u32 },
    /// Toggle the menu's open class and the body scroll lock together.
    SetMenuOpen(bool),
    /// Cancel the event's default behavior.
    PreventDefault,
    /// Show the press cue, then open `link` after `delay_ms`.
    OpenOutbound { link: OutboundLink, delay_ms: u32 },
    /// Smooth-scroll the window to `top`.
    ScrollTo { top: f64 },
    /// Add the reveal class and stop observing the element.
    Reveal(RevealKey),
    /// Set `animation-play-state` on every floating decoration.
    SetPlayState(PlayState),
}

pub struct SiteCore {
    config: SiteConfig,
    theme: Theme,
    menu: MenuState,
    reveal: RevealSet,
    resize: DebounceGate,
    play_state: PlayState,
}

impl SiteCore {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let reveal = RevealSet::new(config.reveal_threshold);
        Self {
            config,
            theme: Theme::default(),
            menu: MenuState::default(),
            reveal,
            resize: DebounceGate::default(),
            play_state: PlayState::default(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    #[must_use]
    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    // --- Theme ---

    /// Pick and apply the startup theme. Nothing is persisted here; the
    /// stored value only changes on an explicit toggle.
    pub fn init_theme(&mut self, stored: Option<&str>, prefers_dark: bool) -> Vec<Action> {
        self.theme = Theme::resolve(stored, prefers_dark);
        vec![Action::ApplyTheme(self.theme)]
    }

    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.theme = self.theme.toggled();
        vec![
            Action::ApplyTheme(self.theme),
            Action::PersistTheme(self.theme),
            Action::ThemeTransition { duration_ms: self.config.theme_transition_ms },
        ]
    }

    // --- Menu ---

    pub fn open_menu(&mut self) -> Vec<Action> {
        self.set_menu(true)
    }

    pub fn close_menu(&mut self) -> Vec<Action> {
        self.set_menu(false)
    }

    fn set_menu(&mut self, open: bool) -> Vec<Action> {
        self.menu.set_open(open);
        vec![Action::SetMenuOpen(open)]
    }

    /// Any document click; closes an open menu when it lands outside both
    /// the panel and its trigger.
    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<Action> {
        if self.menu.should_dismiss(target) {
            return self.close_menu();
        }
        Vec::new()
    }

    /// A resize event arrived; returns the debounce ticket to hand back to
    /// [`Self::on_resize_settled`] once the quiet period ends.
    pub fn on_resize(&mut self) -> u64 {
        self.resize.schedule()
    }

    /// The quiet period after a resize ended with the viewport at `width`.
    pub fn on_resize_settled(&mut self, ticket: u64, width: f64) -> Vec<Action> {
        if !self.resize.is_current(ticket) {
            return Vec::new();
        }
        if self.menu.should_close_for_width(width, self.config.menu_breakpoint_px) {
            log::debug!("menu: viewport {width}px past breakpoint, closing");
            return self.close_menu();
        }
        Vec::new()
    }

    // --- Retailer links ---

    /// Click on a bound retailer card carrying `url` in its data attribute.
    pub fn on_retailer_click(&self, url: Option<&str>) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        if let Some(link) = OutboundLink::from_attribute(url) {
            actions.push(Action::OpenOutbound { link, delay_ms: self.config.press_feedback_ms });
        }
        actions
    }

    // --- Smooth scroll ---

    /// Click on an in-page anchor. `target_offset_top` is the resolved
    /// element's `offsetTop`, or `None` when the fragment names nothing.
    pub fn on_anchor_click(&self, target_offset_top: Option<f64>) -> Vec<Action> {
        let Some(offset_top) = target_offset_top else {
            return Vec::new();
        };
        vec![
            Action::PreventDefault,
            Action::ScrollTo { top: scroll_top_for(offset_top, self.config.header_offset_px) },
        ]
    }

    // --- Reveal ---

    pub fn watch(&mut self, key: RevealKey) {
        self.reveal.watch(key);
    }

    pub fn on_intersection(&mut self, key: RevealKey, is_intersecting: bool, ratio: f64) -> Vec<Action> {
        if self.reveal.observe(key, is_intersecting, ratio) {
            return vec![Action::Reveal(key)];
        }
        Vec::new()
    }

    // --- Visibility ---

    pub fn on_visibility_change(&mut self, hidden: bool) -> Vec<Action> {
        self.play_state = PlayState::for_visibility(hidden);
        vec![Action::SetPlayState(self.play_state)]
    }
}

impl Default for SiteCore {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
