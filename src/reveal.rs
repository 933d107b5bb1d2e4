//! One-shot reveal-on-scroll bookkeeping.
//!
//! Each watched element gets a [`RevealKey`] (its index in the observed node
//! list). A key moves from pending to revealed the first time it intersects
//! at or above the threshold and never returns.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

use crate::consts::REVEAL_RATIO_TOLERANCE;

pub type RevealKey = u32;

#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    pending: BTreeSet<RevealKey>,
    revealed: BTreeSet<RevealKey>,
    threshold: f64,
}

impl RevealSet {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, ..Self::default() }
    }

    /// Start watching `key`. Already revealed keys stay revealed.
    pub fn watch(&mut self, key: RevealKey) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Feed one intersection observation. Returns `true` only on the
    /// transition to revealed. `ratio` may sit up to
    /// [`REVEAL_RATIO_TOLERANCE`] under the threshold.
    pub fn observe(&mut self, key: RevealKey, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + REVEAL_RATIO_TOLERANCE < self.threshold {
            return false;
        }
        if !self.pending.remove(&key) {
            return false;
        }
        self.revealed.insert(key);
        true
    }

    #[must_use]
    pub fn is_pending(&self, key: RevealKey) -> bool {
        self.pending.contains(&key)
    }

    #[must_use]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }
}
