//! Swarm monitoring dashboard client.
//!
//! This crate polls a multi-agent trading backend over REST and merges
//! the partial, independently-arriving updates (agent health, signal
//! feed, portfolio performance) into one coherent view. The merge
//! rules exist so the consumer never observes torn or stale-looking
//! state: whole-object replacement per endpoint, sequence-stamped
//! responses, and a liveness check before any late response is applied.
//!
//! ## Modules
//!
//! - `api`: REST client for the swarm backend (`SwarmApi` trait seam)
//! - `sync`: polling synchronizer and the authoritative snapshot cell
//! - `signals`: signal list with status-filtered views
//! - `risk`: exposure / kill-switch risk classification
//! - `equity`: portfolio series to plot-coordinate projection
//! - `config`: TOML + environment configuration

pub mod api;
pub mod config;
pub mod equity;
pub mod risk;
pub mod signals;
pub mod sync;

pub use api::{ApiClient, ApiError, PerformanceResponse, SignalsResponse, SwarmApi};
pub use config::SwarmConfig;
pub use equity::{CanvasGeometry, EquityCurve, PlotPoint, Trend};
pub use risk::{classify, classify_default, RiskAssessment, RiskLevel, DEFAULT_MAX_POSITIONS};
pub use signals::{SignalFilter, SignalStore};
pub use sync::{ApplyOutcome, DashboardSnapshot, SwarmSynchronizer, SyncConfig, SyncError};
