//! Authoritative snapshot cell with apply-or-discard transitions.
//!
//! All merge rules live here, decoupled from when polling happens.
//! Each endpoint's responses carry a sequence number stamped at issue
//! time; a response whose number is at or below the last applied one
//! for that endpoint lost a race and is discarded. Once the cell is
//! deactivated (view torn down), every response is a no-op.

use swarm_common::{SwarmState, TradingSignal};

use crate::signals::SignalStore;

/// Result of offering a response to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Response was newer than anything applied; state replaced.
    Applied,

    /// An out-of-order response lost the race; state untouched.
    Stale,

    /// The cell has been stopped; state untouched.
    Inactive,
}

/// Coherent view handed to the presentation layer.
///
/// Cloned out of the cell in one step, so a consumer never sees a
/// half-updated agent list or a signal list from a different poll than
/// the one it was fetched with.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Latest swarm state, `None` until the first successful poll.
    pub swarm: Option<SwarmState>,

    /// Latest signal list.
    pub signals: SignalStore,

    /// True while a manual scan is outstanding.
    pub scanning: bool,
}

/// The single authoritative state cell owned by one synchronizer.
#[derive(Debug)]
pub struct SyncState {
    swarm: Option<SwarmState>,
    signals: SignalStore,
    last_status_seq: u64,
    last_signals_seq: u64,
    active: bool,
}

impl SyncState {
    /// Create an empty, active cell. Sequence numbers start above 0,
    /// so 0 means "nothing applied yet".
    pub fn new() -> Self {
        Self {
            swarm: None,
            signals: SignalStore::new(),
            last_status_seq: 0,
            last_signals_seq: 0,
            active: true,
        }
    }

    /// Offer a status response stamped with `seq`.
    pub fn apply_status(&mut self, seq: u64, state: SwarmState) -> ApplyOutcome {
        if !self.active {
            return ApplyOutcome::Inactive;
        }
        if seq <= self.last_status_seq {
            return ApplyOutcome::Stale;
        }
        self.swarm = Some(state);
        self.last_status_seq = seq;
        ApplyOutcome::Applied
    }

    /// Offer a signals response stamped with `seq`.
    pub fn apply_signals(&mut self, seq: u64, signals: Vec<TradingSignal>) -> ApplyOutcome {
        if !self.active {
            return ApplyOutcome::Inactive;
        }
        if seq <= self.last_signals_seq {
            return ApplyOutcome::Stale;
        }
        self.signals.replace(signals);
        self.last_signals_seq = seq;
        ApplyOutcome::Applied
    }

    /// Stop accepting responses. Late arrivals become no-ops.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// True until `deactivate` is called.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clone the current view for consumers.
    pub fn snapshot(&self, scanning: bool) -> DashboardSnapshot {
        DashboardSnapshot {
            swarm: self.swarm.clone(),
            signals: self.signals.clone(),
            scanning,
        }
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}
