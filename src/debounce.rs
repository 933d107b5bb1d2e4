//! Trailing-edge debounce.
//!
//! [`DebounceGate`] is the pure half: every event takes a new ticket and only
//! the newest ticket may act once the quiet period ends. [`Debouncer`] is the
//! browser half that owns the pending `gloo_timers` timeout; replacing it
//! drops (and so clears) the previous one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[cfg(feature = "browser")]
use std::cell::RefCell;

#[cfg(feature = "browser")]
use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Register a new event and return its ticket.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether `ticket` belongs to the most recent event.
    #[must_use]
    pub fn is_current(self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

#[cfg(feature = "browser")]
pub struct Debouncer {
    wait_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

#[cfg(feature = "browser")]
impl Debouncer {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: RefCell::new(None) }
    }

    /// Run `callback` after the quiet period, discarding any earlier call
    /// still waiting.
    pub fn call(&self, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.wait_ms, callback);
        // Dropping the old timeout clears it.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
