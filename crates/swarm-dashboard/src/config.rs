//! Configuration for the swarm dashboard client.
//!
//! Supports loading from a TOML file with environment variable
//! overrides for the backend URL and credentials. Defaults match the
//! backend's expected polling cadence.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::sync::SyncConfig;

/// Top-level configuration for the dashboard client.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    /// Backend base URL.
    pub base_url: String,

    /// Bearer token; omitted from requests when `None`.
    pub auth_token: Option<String>,

    /// Interval between swarm status polls.
    pub status_interval: Duration,

    /// Interval between signal feed polls.
    pub signals_interval: Duration,

    /// Recent signals to request per fetch.
    pub signal_limit: usize,

    /// Days of portfolio history to request.
    pub performance_days: u32,

    /// Position cap used for exposure thresholding.
    pub max_positions: u32,

    /// Per-request HTTP timeout.
    pub request_timeout: Duration,

    /// Logging level for the binary.
    pub log_level: String,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_token: None,
            status_interval: Duration::from_secs(10),
            signals_interval: Duration::from_secs(15),
            signal_limit: 20,
            performance_days: 30,
            max_positions: 5,
            request_timeout: Duration::from_secs(10),
            log_level: "info".to_string(),
        }
    }
}

/// Raw TOML layout; every field optional so a partial file works.
#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    base_url: Option<String>,
    auth_token: Option<String>,
    status_interval_secs: Option<u64>,
    signals_interval_secs: Option<u64>,
    signal_limit: Option<usize>,
    performance_days: Option<u32>,
    max_positions: Option<u32>,
    request_timeout_secs: Option<u64>,
    log_level: Option<String>,
}

impl SwarmConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TomlConfig = toml::from_str(content).context("Failed to parse TOML config")?;
        Ok(Self::from(file))
    }

    /// Apply environment variable overrides for the URL and token.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SWARM_API_URL") {
            self.base_url = url;
        }
        if let Ok(token) = std::env::var("SWARM_API_TOKEN") {
            if !token.is_empty() {
                self.auth_token = Some(token);
            }
        }
    }

    /// Validate the configuration before use.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            bail!("base_url must not be empty");
        }
        if self.status_interval.is_zero() || self.signals_interval.is_zero() {
            bail!("polling intervals must be greater than zero");
        }
        if self.signal_limit == 0 {
            bail!("signal_limit must be greater than zero");
        }
        if self.performance_days == 0 {
            bail!("performance_days must be greater than zero");
        }
        Ok(())
    }

    /// The polling slice of this configuration.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            status_interval: self.status_interval,
            signals_interval: self.signals_interval,
            signal_limit: self.signal_limit,
        }
    }
}

impl From<TomlConfig> for SwarmConfig {
    fn from(toml: TomlConfig) -> Self {
        let defaults = SwarmConfig::default();
        Self {
            base_url: toml.base_url.unwrap_or(defaults.base_url),
            auth_token: toml.auth_token,
            status_interval: toml
                .status_interval_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.status_interval),
            signals_interval: toml
                .signals_interval_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.signals_interval),
            signal_limit: toml.signal_limit.unwrap_or(defaults.signal_limit),
            performance_days: toml.performance_days.unwrap_or(defaults.performance_days),
            max_positions: toml.max_positions.unwrap_or(defaults.max_positions),
            request_timeout: toml
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            log_level: toml.log_level.unwrap_or(defaults.log_level),
        }
    }
}
