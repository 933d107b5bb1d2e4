//! Document lifecycle checks used at startup.
//!
//! `Document.readyState` is a plain string in `web-sys`, so it is parsed
//! here where the startup decisions can be tested natively.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse `document.readyState`. Values the platform may add later are
    /// treated as fully loaded.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// The controller must wait for `DOMContentLoaded`.
    #[must_use]
    pub fn awaits_dom(self) -> bool {
        self == Self::Loading
    }

    /// Window `load` has already fired and will not fire again.
    #[must_use]
    pub fn load_fired(self) -> bool {
        self == Self::Complete
    }
}
