//! REST API surface of the swarm backend.
//!
//! This module provides the `SwarmApi` trait that abstracts the
//! backend endpoints. The same synchronizer code works against:
//! - `ApiClient`, the live reqwest implementation
//! - scripted implementations in tests
//!
//! Response shapes follow the backend contract exactly; endpoints whose
//! payloads are implementation-defined (scan ack, orchestrate,
//! consensus detail) are passed through as raw JSON rather than
//! guessed-at structs.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use swarm_common::{PortfolioSnapshot, SwarmState, TradingSignal};

pub use client::ApiClient;

/// Errors that can occur when talking to the swarm backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-2xx status.
    #[error("API error: status {status}, body: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Response decode failed: {0}")]
    Decode(String),
}

/// Response from `GET /api/swarm/signals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsResponse {
    /// Recent signals, newest first.
    pub signals: Vec<TradingSignal>,

    /// Count reported by the backend (may exceed `signals.len()`).
    pub count: u64,
}

/// Response from `GET /api/performance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResponse {
    /// Strategy the series belongs to.
    pub strategy_id: String,

    /// Number of days requested.
    pub days: u32,

    /// Daily snapshots, ordered by date ascending.
    pub data: Vec<PortfolioSnapshot>,
}

/// Abstraction over the swarm backend's REST endpoints.
///
/// One method per endpoint; all methods are read-only against client
/// state so implementations can be shared behind an `Arc`.
#[async_trait]
pub trait SwarmApi: Send + Sync {
    /// `GET /api/swarm/status`: the current aggregate swarm state.
    async fn swarm_status(&self) -> Result<SwarmState, ApiError>;

    /// `GET /api/swarm/signals?limit=N`: the most recent signals.
    async fn recent_signals(&self, limit: usize) -> Result<SignalsResponse, ApiError>;

    /// `POST /api/swarm/scan`: trigger a scan over the given symbols.
    ///
    /// An empty slice asks the backend to scan its default universe.
    async fn trigger_scan(&self, symbols: &[String]) -> Result<serde_json::Value, ApiError>;

    /// `GET /api/performance?days=N`: daily portfolio series.
    async fn performance(&self, days: u32) -> Result<PerformanceResponse, ApiError>;

    /// `POST /api/swarm/orchestrate`: run the full agent pipeline for
    /// one symbol.
    async fn orchestrate(&self, symbol: &str) -> Result<serde_json::Value, ApiError>;

    /// `GET /api/swarm/consensus/:signal_id`: per-agent vote detail
    /// for a signal.
    async fn consensus(&self, signal_id: u64) -> Result<serde_json::Value, ApiError>;
}
