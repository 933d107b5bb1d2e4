//! Browser host for [`SiteCore`]: owns the DOM handles and applies actions.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlElement, IntersectionObserver, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::{MENU_OPEN_CLASS, PRESS_TRANSFORM, REVEAL_CLASS, THEME_TRANSITION_STYLE};
use crate::controller::{Action, SiteCore};
use crate::debounce::Debouncer;
use crate::retailer::OutboundLink;
use crate::reveal::RevealKey;
use crate::theme;
use crate::web::dom::set_style;

/// The side menu panel and the control that opens it.
pub struct MenuElements {
    pub panel: HtmlElement,
    pub trigger: HtmlElement,
}

pub struct Host {
    pub core: RefCell<SiteCore>,
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub menu: Option<MenuElements>,
    pub floats: Vec<HtmlElement>,
    pub reveal_targets: RefCell<Vec<Element>>,
    pub observer: RefCell<Option<IntersectionObserver>>,
    pub resize: Debouncer,
}

impl Host {
    pub fn new(core: SiteCore, window: Window, document: Document) -> Self {
        let resize = Debouncer::new(core.config().resize_debounce_ms);
        let body = document.body();
        Self {
            core: RefCell::new(core),
            window,
            document,
            body,
            menu: None,
            floats: Vec::new(),
            reveal_targets: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            resize,
        }
    }

    /// Run a core transition and apply its actions. The core borrow ends
    /// before any action runs.
    pub fn dispatch(&self, event: Option<&Event>, source: Option<&HtmlElement>, step: impl FnOnce(&mut SiteCore) -> Vec<Action>) {
        let actions = step(&mut self.core.borrow_mut());
        for action in actions {
            self.apply(action, event, source);
        }
    }

    fn apply(&self, action: Action, event: Option<&Event>, source: Option<&HtmlElement>) {
        match action {
            Action::ApplyTheme(next) => theme::apply(next),
            Action::PersistTheme(next) => {
                let key = self.core.borrow().config().theme_storage_key.clone();
                theme::persist(&key, next);
            }
            Action::ThemeTransition { duration_ms } => self.theme_transition(duration_ms),
            Action::SetMenuOpen(open) => self.set_menu_open(open),
            Action::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Action::OpenOutbound { link, delay_ms } => self.open_outbound(source, link, delay_ms),
            Action::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::Reveal(key) => self.reveal(key),
            Action::SetPlayState(state) => {
                for el in &self.floats {
                    set_style(el, "animation-play-state", state.as_css());
                }
            }
        }
    }

    fn theme_transition(&self, duration_ms: u32) {
        let Some(body) = self.body.clone() else {
            return;
        };
        set_style(&body, "transition", THEME_TRANSITION_STYLE);
        Timeout::new(duration_ms, move || set_style(&body, "transition", "")).forget();
    }

    fn set_menu_open(&self, open: bool) {
        let Some(menu) = &self.menu else {
            return;
        };
        if let Err(err) = menu.panel.class_list().toggle_with_force(MENU_OPEN_CLASS, open) {
            log::warn!("menu: failed to toggle class: {err:?}");
        }
        if let Some(body) = &self.body {
            let overflow = self.core.borrow().menu().body_overflow();
            set_style(body, "overflow", overflow);
        }
    }

    fn open_outbound(&self, source: Option<&HtmlElement>, link: OutboundLink, delay_ms: u32) {
        let card = source.cloned();
        if let Some(card) = &card {
            set_style(card, "transform", PRESS_TRANSFORM);
        }
        let window = self.window.clone();
        Timeout::new(delay_ms, move || {
            if let Some(card) = &card {
                set_style(card, "transform", "");
            }
            match window.open_with_url_and_target_and_features(link.url(), link.target(), link.features()) {
                Ok(_) => log::debug!("retailer: opened {}", link.url()),
                Err(err) => log::warn!("retailer: failed to open {}: {err:?}", link.url()),
            }
        })
        .forget();
    }

    /// Reveal key of an observed element.
    pub fn key_of(&self, target: &Element) -> Option<RevealKey> {
        let index = self.reveal_targets.borrow().iter().position(|el| el == target)?;
        RevealKey::try_from(index).ok()
    }

    fn reveal(&self, key: RevealKey) {
        let targets = self.reveal_targets.borrow();
        let Some(el) = usize::try_from(key).ok().and_then(|i| targets.get(i)) else {
            return;
        };
        if let Err(err) = el.class_list().add_1(REVEAL_CLASS) {
            log::warn!("reveal: failed to add class: {err:?}");
        }
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer.unobserve(el);
        }
    }
}
