//! Signal list with status-filtered views.
//!
//! The store holds the most recent signal list exactly as the backend
//! returned it (newest first) and exposes filtered views without
//! mutating the underlying list. Replacement is wholesale: if the
//! backend returns an `id` already present with a different status,
//! the newer fetch's signal wins in full; fields are never merged.

use swarm_common::{SignalStatus, TradingSignal};

/// View selector over the signal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalFilter {
    /// The full list, order untouched.
    All,

    /// Only signals whose status exactly matches.
    Status(SignalStatus),
}

impl SignalFilter {
    fn matches(&self, signal: &TradingSignal) -> bool {
        match self {
            SignalFilter::All => true,
            SignalFilter::Status(status) => signal.status == *status,
        }
    }
}

/// Ordered collection of the most recent trading signals.
#[derive(Debug, Clone, Default)]
pub struct SignalStore {
    signals: Vec<TradingSignal>,
}

impl SignalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire list with the latest fetch.
    ///
    /// No deduplication beyond trusting `id` uniqueness from the
    /// backend; order is preserved as received.
    pub fn replace(&mut self, signals: Vec<TradingSignal>) {
        self.signals = signals;
    }

    /// The full list, newest first.
    pub fn all(&self) -> &[TradingSignal] {
        &self.signals
    }

    /// Number of signals currently held.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// True if no signals are held.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Filtered view, preserving the original order.
    pub fn filtered(&self, filter: SignalFilter) -> Vec<TradingSignal> {
        self.signals
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Count of signals with the given status, for tab badges.
    pub fn count_by_status(&self, status: SignalStatus) -> usize {
        self.signals.iter().filter(|s| s.status == status).count()
    }
}
