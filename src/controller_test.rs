use super::*;
use proptest::prelude::*;

// =============================================================
// Helpers
// =============================================================

fn core() -> SiteCore {
    SiteCore::default()
}

fn persisted(actions: &[Action]) -> Option<Theme> {
    actions.iter().rev().find_map(|a| match a {
        Action::PersistTheme(theme) => Some(*theme),
        _ => None,
    })
}

fn applied(actions: &[Action]) -> Option<Theme> {
    actions.iter().rev().find_map(|a| match a {
        Action::ApplyTheme(theme) => Some(*theme),
        _ => None,
    })
}

// =============================================================
// Theme
// =============================================================

#[test]
fn init_theme_without_stored_value_follows_hint() {
    let mut site = core();
    assert_eq!(site.init_theme(None, true), vec![Action::ApplyTheme(Theme::Dark)]);
    assert_eq!(site.theme(), Theme::Dark);

    let mut site = core();
    assert_eq!(site.init_theme(None, false), vec![Action::ApplyTheme(Theme::Light)]);
    assert_eq!(site.theme(), Theme::Light);
}

#[test]
fn init_theme_uses_stored_value() {
    let mut site = core();
    site.init_theme(Some("dark"), false);
    assert_eq!(site.theme(), Theme::Dark);
}

#[test]
fn init_theme_does_not_persist() {
    let mut site = core();
    let actions = site.init_theme(None, true);
    assert_eq!(persisted(&actions), None);
}

#[test]
fn toggle_theme_applies_persists_and_transitions() {
    let mut site = core();
    site.init_theme(Some("light"), false);
    let actions = site.toggle_theme();
    assert_eq!(
        actions,
        vec![
            Action::ApplyTheme(Theme::Dark),
            Action::PersistTheme(Theme::Dark),
            Action::ThemeTransition { duration_ms: 300 },
        ]
    );
}

#[test]
fn toggle_twice_returns_to_original() {
    let mut site = core();
    site.init_theme(None, true);
    site.toggle_theme();
    site.toggle_theme();
    assert_eq!(site.theme(), Theme::Dark);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn open_and_close_emit_paired_state() {
    let mut site = core();
    assert_eq!(site.open_menu(), vec![Action::SetMenuOpen(true)]);
    assert!(site.menu().is_open());
    assert!(site.menu().scroll_locked());
    assert_eq!(site.close_menu(), vec![Action::SetMenuOpen(false)]);
    assert!(!site.menu().scroll_locked());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut site = core();
    site.open_menu();
    assert_eq!(site.on_document_click(ClickTarget::outside()), vec![Action::SetMenuOpen(false)]);
    assert!(!site.menu().is_open());
}

#[test]
fn outside_click_while_closed_is_noop() {
    let mut site = core();
    assert!(site.on_document_click(ClickTarget::outside()).is_empty());
    assert!(!site.menu().is_open());
}

#[test]
fn click_on_trigger_keeps_menu_open() {
    let mut site = core();
    site.open_menu();
    let actions = site.on_document_click(ClickTarget { in_menu: false, in_trigger: true });
    assert!(actions.is_empty());
    assert!(site.menu().is_open());
}

#[test]
fn settled_wide_resize_closes_open_menu() {
    let mut site = core();
    site.open_menu();
    let ticket = site.on_resize();
    assert_eq!(site.on_resize_settled(ticket, 1024.0), vec![Action::SetMenuOpen(false)]);
    assert!(!site.menu().is_open());
}

#[test]
fn resize_below_breakpoint_or_closed_is_noop() {
    let mut site = core();
    let ticket = site.on_resize();
    assert!(site.on_resize_settled(ticket, 1024.0).is_empty());

    site.open_menu();
    let ticket = site.on_resize();
    assert!(site.on_resize_settled(ticket, 768.0).is_empty());
    assert!(site.menu().is_open());
}

#[test]
fn stale_resize_ticket_is_ignored() {
    let mut site = core();
    site.open_menu();
    let stale = site.on_resize();
    let fresh = site.on_resize();
    assert!(site.on_resize_settled(stale, 1200.0).is_empty());
    assert!(site.menu().is_open());
    assert_eq!(site.on_resize_settled(fresh, 1200.0), vec![Action::SetMenuOpen(false)]);
}

// =============================================================
// Retailer links
// =============================================================

#[test]
fn retailer_click_prevents_default_and_opens_after_press() {
    let site = core();
    let actions = site.on_retailer_click(Some("https://shop.example"));
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], Action::PreventDefault);
    let Action::OpenOutbound { link, delay_ms } = &actions[1] else {
        panic!("expected outbound action, got {:?}", actions[1]);
    };
    assert_eq!(link.url(), "https://shop.example");
    assert_eq!(*delay_ms, 150);
}

#[test]
fn retailer_click_with_blank_url_only_prevents_default() {
    let site = core();
    assert_eq!(site.on_retailer_click(Some("")), vec![Action::PreventDefault]);
}

// =============================================================
// Smooth scroll
// =============================================================

#[test]
fn resolved_anchor_scrolls_below_header() {
    let site = core();
    assert_eq!(
        site.on_anchor_click(Some(900.0)),
        vec![Action::PreventDefault, Action::ScrollTo { top: 800.0 }]
    );
}

#[test]
fn unresolved_anchor_leaves_default_navigation() {
    let site = core();
    assert!(site.on_anchor_click(None).is_empty());
}

#[test]
fn header_offset_comes_from_config() {
    let config = SiteConfig { header_offset_px: 64.0, ..SiteConfig::default() };
    let site = SiteCore::new(config);
    assert_eq!(
        site.on_anchor_click(Some(100.0)),
        vec![Action::PreventDefault, Action::ScrollTo { top: 36.0 }]
    );
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn intersection_reveals_exactly_once() {
    let mut site = core();
    site.watch(0);
    assert_eq!(site.on_intersection(0, true, 0.25), vec![Action::Reveal(0)]);
    assert!(site.on_intersection(0, true, 0.9).is_empty());
    assert!(site.on_intersection(0, false, 0.0).is_empty());
    assert!(site.reveal().is_revealed(0));
}

#[test]
fn reveal_threshold_comes_from_config() {
    let config = SiteConfig { reveal_threshold: 0.5, ..SiteConfig::default() };
    let mut site = SiteCore::new(config);
    site.watch(1);
    assert!(site.on_intersection(1, true, 0.3).is_empty());
    assert_eq!(site.on_intersection(1, true, 0.5), vec![Action::Reveal(1)]);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_change_sets_play_state() {
    let mut site = core();
    assert_eq!(site.on_visibility_change(true), vec![Action::SetPlayState(PlayState::Paused)]);
    assert_eq!(site.play_state(), PlayState::Paused);
    assert_eq!(site.on_visibility_change(false), vec![Action::SetPlayState(PlayState::Running)]);
}

// =============================================================
// Sequence properties
// =============================================================

#[derive(Clone, Copy, Debug)]
enum MenuEvent {
    Open,
    Close,
    OutsideClick,
    InsideClick,
    Resize(f64),
}

fn menu_event() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        Just(MenuEvent::Open),
        Just(MenuEvent::Close),
        Just(MenuEvent::OutsideClick),
        Just(MenuEvent::InsideClick),
        (300.0f64..1600.0).prop_map(MenuEvent::Resize),
    ]
}

proptest! {
    #[test]
    fn menu_and_scroll_lock_always_agree(events in prop::collection::vec(menu_event(), 0..40)) {
        let mut site = core();
        let mut shown_open = false;
        for event in events {
            let actions = match event {
                MenuEvent::Open => site.open_menu(),
                MenuEvent::Close => site.close_menu(),
                MenuEvent::OutsideClick => site.on_document_click(ClickTarget::outside()),
                MenuEvent::InsideClick => site.on_document_click(ClickTarget { in_menu: true, in_trigger: false }),
                MenuEvent::Resize(width) => {
                    let ticket = site.on_resize();
                    site.on_resize_settled(ticket, width)
                }
            };
            for action in &actions {
                if let Action::SetMenuOpen(open) = action {
                    shown_open = *open;
                }
            }
            prop_assert_eq!(site.menu().is_open(), site.menu().scroll_locked());
            prop_assert_eq!(site.menu().is_open(), shown_open);
        }
    }

    #[test]
    fn persisted_theme_tracks_last_applied(hint in any::<bool>(), toggles in 1usize..12) {
        let mut site = core();
        let start = applied(&site.init_theme(None, hint));
        for _ in 0..toggles {
            let actions = site.toggle_theme();
            prop_assert_eq!(persisted(&actions), applied(&actions));
            prop_assert_eq!(persisted(&actions), Some(site.theme()));
        }
        if toggles % 2 == 0 {
            prop_assert_eq!(Some(site.theme()), start);
        } else {
            prop_assert_ne!(Some(site.theme()), start);
        }
    }
}
