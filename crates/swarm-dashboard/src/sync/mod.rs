//! Polling synchronizer for the swarm dashboard.
//!
//! Owns the authoritative snapshot cell and two independent pollers
//! (swarm status and signal feed). Scheduling is decoupled from
//! merging: pollers only decide *when* to fetch; every response goes
//! through the cell's apply-or-discard transitions in `state`, stamped
//! with a monotonic sequence number taken at issue time.
//!
//! ## Lifecycle
//!
//! - `start()` fetches both endpoints immediately, then re-fetches on
//!   independent timers until `stop()`.
//! - `stop()` deactivates the cell before signalling the pollers, so a
//!   response that is already in flight lands as a no-op.
//! - A failed poll is logged and the previous state retained; a
//!   transient outage never blanks the dashboard.
//!
//! ## Manual scans
//!
//! `trigger_scan` is mutually exclusive with itself via a
//! compare-and-swap on the scan guard. A second trigger while one is
//! outstanding gets `SyncError::ScanInProgress`, surfaced rather than
//! queued. Completion (success or failure) clears the guard and issues
//! a fresh status fetch so new signals show up without waiting for the
//! next timer tick.

pub mod state;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::api::{ApiError, SwarmApi};

pub use state::{ApplyOutcome, DashboardSnapshot, SyncState};

/// Errors surfaced to callers of synchronizer actions.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A scan is already outstanding; the trigger was rejected.
    #[error("A scan is already in progress")]
    ScanInProgress,

    /// The backend call behind a user-initiated action failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Polling configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Interval between swarm status fetches.
    pub status_interval: Duration,

    /// Interval between signal feed fetches.
    pub signals_interval: Duration,

    /// How many recent signals to request per fetch.
    pub signal_limit: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            status_interval: Duration::from_secs(10),
            signals_interval: Duration::from_secs(15),
            signal_limit: 20,
        }
    }
}

/// State shared between the synchronizer handle and its poller tasks.
struct Shared {
    cell: RwLock<SyncState>,
    seq: AtomicU64,
    scanning: AtomicBool,
}

impl Shared {
    fn new() -> Self {
        Self {
            cell: RwLock::new(SyncState::new()),
            seq: AtomicU64::new(0),
            scanning: AtomicBool::new(false),
        }
    }

    /// Next request sequence number. Starts at 1; the cell treats 0 as
    /// "nothing applied yet".
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Maintains the freshest known swarm state while the dashboard is
/// mounted. One instance per mounted dashboard; instances never share
/// timers or guards.
pub struct SwarmSynchronizer {
    api: Arc<dyn SwarmApi>,
    config: SyncConfig,
    shared: Arc<Shared>,
    shutdown_tx: broadcast::Sender<()>,
    started: AtomicBool,
}

impl SwarmSynchronizer {
    /// Create a synchronizer over the given API implementation.
    pub fn new(api: Arc<dyn SwarmApi>, config: SyncConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(4);
        Self {
            api,
            config,
            shared: Arc::new(Shared::new()),
            shutdown_tx,
            started: AtomicBool::new(false),
        }
    }

    /// Begin polling. Both endpoints are fetched immediately, then on
    /// their own timers. Calling `start` twice is a no-op.
    pub fn start(&self) {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("synchronizer already started");
            return;
        }

        info!(
            status_interval = ?self.config.status_interval,
            signals_interval = ?self.config.signals_interval,
            "starting swarm synchronizer"
        );

        let api = Arc::clone(&self.api);
        let shared = Arc::clone(&self.shared);
        let status_interval = self.config.status_interval;
        let mut shutdown = self.shutdown_tx.subscribe();
        tokio::spawn(async move {
            let mut ticker = interval(status_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        poll_status_once(&api, &shared).await;
                    }
                    _ = shutdown.recv() => {
                        debug!("status poller shutting down");
                        break;
                    }
                }
            }
        });

        let api = Arc::clone(&self.api);
        let shared = Arc::clone(&self.shared);
        let signals_interval = self.config.signals_interval;
        let signal_limit = self.config.signal_limit;
        let mut shutdown = self.shutdown_tx.subscribe();
        tokio::spawn(async move {
            let mut ticker = interval(signals_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        poll_signals_once(&api, &shared, signal_limit).await;
                    }
                    _ = shutdown.recv() => {
                        debug!("signals poller shutting down");
                        break;
                    }
                }
            }
        });
    }

    /// Stop polling and deactivate the cell. In-flight responses that
    /// resolve after this point are discarded.
    pub fn stop(&self) {
        // Deactivate first: pollers may only notice the shutdown signal
        // on their next loop turn, and a fetch that is mid-flight right
        // now must not land.
        self.shared.cell.write().deactivate();
        let _ = self.shutdown_tx.send(());
        info!("swarm synchronizer stopped");
    }

    /// Trigger a scan over the given symbols (empty = backend default
    /// universe). Mutually exclusive with itself; rejected with
    /// `ScanInProgress` while one is outstanding.
    pub async fn trigger_scan(
        &self,
        symbols: &[String],
    ) -> Result<serde_json::Value, SyncError> {
        if self
            .shared
            .scanning
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SyncError::ScanInProgress);
        }

        info!(symbols = symbols.len(), "triggering swarm scan");
        let result = self.api.trigger_scan(symbols).await;
        self.shared.scanning.store(false, Ordering::Release);

        // Refresh regardless of the scan outcome so the view reflects
        // whatever the backend recorded.
        poll_status_once(&self.api, &self.shared).await;

        match result {
            Ok(ack) => Ok(ack),
            Err(e) => {
                warn!(error = %e, "scan failed");
                Err(SyncError::Api(e))
            }
        }
    }

    /// Fetch the status endpoint once, outside the timer cadence.
    /// Failures are logged and swallowed like any poll.
    pub async fn refresh_status(&self) {
        poll_status_once(&self.api, &self.shared).await;
    }

    /// Fetch the signal feed once, outside the timer cadence.
    pub async fn refresh_signals(&self) {
        poll_signals_once(&self.api, &self.shared, self.config.signal_limit).await;
    }

    /// Clone the current coherent view.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let scanning = self.shared.scanning.load(Ordering::Acquire);
        self.shared.cell.read().snapshot(scanning)
    }

    /// True while a manual scan is outstanding.
    pub fn is_scanning(&self) -> bool {
        self.shared.scanning.load(Ordering::Acquire)
    }
}

async fn poll_status_once(api: &Arc<dyn SwarmApi>, shared: &Shared) {
    let seq = shared.next_seq();
    match api.swarm_status().await {
        Ok(state) => {
            let outcome = shared.cell.write().apply_status(seq, state);
            log_outcome("status", seq, outcome);
        }
        Err(e) => {
            warn!(seq, error = %e, "status poll failed, keeping previous state");
        }
    }
}

async fn poll_signals_once(api: &Arc<dyn SwarmApi>, shared: &Shared, limit: usize) {
    let seq = shared.next_seq();
    match api.recent_signals(limit).await {
        Ok(response) => {
            let outcome = shared.cell.write().apply_signals(seq, response.signals);
            log_outcome("signals", seq, outcome);
        }
        Err(e) => {
            warn!(seq, error = %e, "signals poll failed, keeping previous state");
        }
    }
}

fn log_outcome(endpoint: &str, seq: u64, outcome: ApplyOutcome) {
    match outcome {
        ApplyOutcome::Applied => debug!(endpoint, seq, "response applied"),
        ApplyOutcome::Stale => debug!(endpoint, seq, "stale response discarded"),
        ApplyOutcome::Inactive => debug!(endpoint, seq, "response after stop discarded"),
    }
}
