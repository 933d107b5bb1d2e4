//! Shared constants for the storefront controller.
//!
//! These are the built-in defaults; [`crate::config::SiteConfig`] lets a page
//! override any of them.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query used when no preference is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// How long the body keeps its transition style after a toggle.
pub const THEME_TRANSITION_MS: u32 = 300;

/// Inline transition applied to `<body>` while the theme swaps.
pub const THEME_TRANSITION_STYLE: &str = "all 0.3s ease";

// ── Menu ────────────────────────────────────────────────────────

/// Viewport width above which an open side menu is force-closed.
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before a resize burst is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Class marking the side menu as open.
pub const MENU_OPEN_CLASS: &str = "open";

// ── Retailer links ──────────────────────────────────────────────

/// Delay between the press cue and opening the retailer page.
pub const PRESS_FEEDBACK_MS: u32 = 150;

/// Inline transform applied while a retailer card is pressed.
pub const PRESS_TRANSFORM: &str = "scale(0.95)";

/// Browsing context target for outbound links.
pub const OUTBOUND_TARGET: &str = "_blank";

/// Window features isolating the outbound context from this page.
pub const OUTBOUND_FEATURES: &str = "noopener,noreferrer";

// ── Scrolling ───────────────────────────────────────────────────

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 100.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction at which a pending element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Slack for observers that report the threshold crossing with a rounded
/// ratio just under the threshold.
pub const REVEAL_RATIO_TOLERANCE: f64 = 1e-3;

/// Observer root margin; shrinks the trigger zone 50px from the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Terminal class applied to revealed elements.
pub const REVEAL_CLASS: &str = "animate-in";

// ── Motion ──────────────────────────────────────────────────────

/// Per-index animation delay for floating decorations, in seconds.
pub const FLOAT_STAGGER_S: f64 = 0.5;

/// Shadow applied to glass panels under the pointer.
pub const HOVER_GLOW_SHADOW: &str = "0 30px 60px rgba(16, 185, 129, 0.2)";
