//! Decorative motion: floating-element stagger and visibility pausing.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// CSS `animation-play-state` for floating decorations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    /// Animations pause while the tab is hidden.
    #[must_use]
    pub fn for_visibility(hidden: bool) -> Self {
        if hidden { Self::Paused } else { Self::Running }
    }

    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

/// `animation-delay` for the floating element at `index`.
#[must_use]
pub fn stagger_delay(index: u32, step_s: f64) -> String {
    format!("{}s", f64::from(index) * step_s)
}
