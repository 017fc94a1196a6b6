//! Wire types for the swarm monitoring backend.
//!
//! CRITICAL: All prices and portfolio values use `rust_decimal::Decimal`.
//! NEVER use f64 for financial math. Confidence and plot coordinates are
//! ratios/rendering values, not money, and stay f64.
//!
//! Every type here is produced by backend responses and replaced
//! wholesale on each poll; the client never mutates individual fields.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Health status reported for a swarm agent.
///
/// Unknown values are a deserialization error on purpose: a new backend
/// status must show up as a visible failure, not a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Alive,
    Degraded,
    Dead,
}

impl AgentStatus {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Alive => "alive",
            AgentStatus::Degraded => "degraded",
            AgentStatus::Dead => "dead",
        }
    }

    /// Display color for the status badge.
    pub fn color(&self) -> &'static str {
        match self {
            AgentStatus::Alive => "#22c55e",
            AgentStatus::Degraded => "#f59e0b",
            AgentStatus::Dead => "#ef4444",
        }
    }

    /// Single-character indicator for compact rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            AgentStatus::Alive => "●",
            AgentStatus::Degraded => "◐",
            AgentStatus::Dead => "○",
        }
    }

    /// True if the agent is serving its role (possibly impaired).
    pub fn is_operational(&self) -> bool {
        match self {
            AgentStatus::Alive | AgentStatus::Degraded => true,
            AgentStatus::Dead => false,
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named backend worker producing trading signals or risk decisions.
///
/// Identity is `name`, unique within a snapshot. The set of agents is
/// replaced in full on every status poll; partial agent updates never
/// happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent name within a snapshot.
    pub name: String,

    /// Role description (e.g., "scanner", "risk").
    pub role: String,

    /// Reported health status.
    pub status: AgentStatus,

    /// Last heartbeat timestamp, if the agent has ever reported one.
    pub last_heartbeat: Option<DateTime<Utc>>,

    /// Configured scan interval in seconds.
    pub scan_interval: u64,

    /// Lifetime count of signals this agent has generated.
    pub signals_generated: u64,

    /// Number of tasks the agent is currently working.
    pub active_tasks: u32,
}

/// Direction of a trade proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Long,
    Short,
    Neutral,
}

impl SignalDirection {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Long => "LONG",
            SignalDirection::Short => "SHORT",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a trading signal.
///
/// Status is monotone on the backend: once a signal reaches a terminal
/// status it never reports an earlier stage again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Pending,
    Approved,
    Rejected,
    Executed,
    Expired,
}

impl SignalStatus {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Pending => "pending",
            SignalStatus::Approved => "approved",
            SignalStatus::Rejected => "rejected",
            SignalStatus::Executed => "executed",
            SignalStatus::Expired => "expired",
        }
    }

    /// Display color for the status badge.
    pub fn color(&self) -> &'static str {
        match self {
            SignalStatus::Pending => "#f59e0b",
            SignalStatus::Approved => "#3b82f6",
            SignalStatus::Rejected => "#6b7280",
            SignalStatus::Executed => "#22c55e",
            SignalStatus::Expired => "#9ca3af",
        }
    }

    /// True once the signal can no longer change stage.
    pub fn is_terminal(&self) -> bool {
        match self {
            SignalStatus::Executed | SignalStatus::Rejected | SignalStatus::Expired => true,
            SignalStatus::Pending | SignalStatus::Approved => false,
        }
    }
}

impl std::fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directional trade proposal produced by the swarm.
///
/// `id` is unique and monotonic by creation time; lists arrive newest
/// first from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    /// Unique identifier, monotonic by creation.
    pub id: u64,

    /// Traded symbol (e.g., "BTCUSDT").
    pub symbol: String,

    /// Proposed direction.
    pub direction: SignalDirection,

    /// Model confidence in [0, 1].
    pub confidence: f64,

    /// Current lifecycle status.
    pub status: SignalStatus,

    /// Proposed entry price.
    pub entry_price: Option<Decimal>,

    /// Stop loss level.
    pub stop_loss: Option<Decimal>,

    /// Take profit level.
    pub take_profit: Option<Decimal>,

    /// Risk/reward ratio for the proposed levels.
    pub risk_reward: Option<Decimal>,

    /// Timeframe the signal was generated on (e.g., "4h").
    pub timeframe: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One day of portfolio performance.
///
/// A series is ordered by `date` ascending; the latest snapshot is the
/// last element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Snapshot date.
    pub date: NaiveDate,

    /// Total portfolio value.
    pub total_value: Decimal,

    /// Cumulative profit and loss.
    pub total_pnl: Decimal,

    /// Cumulative P&L as a percentage of starting value.
    pub total_pnl_pct: Decimal,

    /// Win rate over the period, when the backend has computed one.
    pub win_rate: Option<f64>,

    /// Sharpe ratio over the period.
    pub sharpe_ratio: Option<f64>,

    /// Maximum drawdown over the period.
    pub max_drawdown: Option<f64>,
}

/// Aggregate snapshot of all agents plus coarse portfolio/risk counters.
///
/// This is the unit of atomic replacement: the full object from the
/// status endpoint replaces the previous one in one step, so a consumer
/// never observes a half-updated agent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmState {
    /// All known agents, replaced wholesale each poll.
    pub agents: Vec<Agent>,

    /// Signals generated since midnight UTC.
    pub total_signals_today: u64,

    /// Open position count, used for exposure thresholding.
    pub active_positions: u32,

    /// Backend-asserted halt on new trades.
    pub kill_switch_active: bool,

    /// Timestamp of the last completed scan, if any.
    pub last_scan: Option<DateTime<Utc>>,
}

impl SwarmState {
    /// Count of agents currently reporting `alive`.
    pub fn alive_agents(&self) -> usize {
        self.agents
            .iter()
            .filter(|a| a.status == AgentStatus::Alive)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_agent_status_serde_lowercase() {
        let status: AgentStatus = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(status, AgentStatus::Degraded);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"degraded\"");
    }

    #[test]
    fn test_agent_status_unknown_value_rejected() {
        let result: Result<AgentStatus, _> = serde_json::from_str("\"zombie\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_signal_status_terminal() {
        assert!(SignalStatus::Executed.is_terminal());
        assert!(SignalStatus::Rejected.is_terminal());
        assert!(SignalStatus::Expired.is_terminal());
        assert!(!SignalStatus::Pending.is_terminal());
        assert!(!SignalStatus::Approved.is_terminal());
    }

    #[test]
    fn test_direction_serde_uppercase() {
        let dir: SignalDirection = serde_json::from_str("\"LONG\"").unwrap();
        assert_eq!(dir, SignalDirection::Long);
    }

    #[test]
    fn test_trading_signal_decode() {
        let json = r#"{
            "id": 1042,
            "symbol": "BTCUSDT",
            "direction": "SHORT",
            "confidence": 0.82,
            "status": "approved",
            "entry_price": 96250.5,
            "stop_loss": 97100.0,
            "take_profit": 94500.0,
            "risk_reward": 2.06,
            "timeframe": "4h",
            "created_at": "2026-08-29T14:05:00Z"
        }"#;

        let signal: TradingSignal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.id, 1042);
        assert_eq!(signal.direction, SignalDirection::Short);
        assert_eq!(signal.status, SignalStatus::Approved);
        assert_eq!(signal.entry_price, Some(dec!(96250.5)));
        assert!((signal.confidence - 0.82).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trading_signal_optional_levels_absent() {
        let json = r#"{
            "id": 7,
            "symbol": "ETHUSDT",
            "direction": "NEUTRAL",
            "confidence": 0.31,
            "status": "pending",
            "entry_price": null,
            "stop_loss": null,
            "take_profit": null,
            "risk_reward": null,
            "timeframe": "1h",
            "created_at": "2026-08-29T09:00:00Z"
        }"#;

        let signal: TradingSignal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.entry_price, None);
        assert_eq!(signal.risk_reward, None);
    }

    #[test]
    fn test_portfolio_snapshot_decode() {
        let json = r#"{
            "date": "2026-08-28",
            "total_value": 10482.11,
            "total_pnl": 482.11,
            "total_pnl_pct": 4.82,
            "win_rate": 0.61,
            "sharpe_ratio": 1.4,
            "max_drawdown": null
        }"#;

        let snap: PortfolioSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.total_value, dec!(10482.11));
        assert_eq!(snap.max_drawdown, None);
    }

    #[test]
    fn test_swarm_state_decode_and_alive_count() {
        let json = r#"{
            "agents": [
                {
                    "name": "scanner-1",
                    "role": "scanner",
                    "status": "alive",
                    "last_heartbeat": "2026-08-29T14:00:00Z",
                    "scan_interval": 300,
                    "signals_generated": 812,
                    "active_tasks": 2
                },
                {
                    "name": "risk-1",
                    "role": "risk",
                    "status": "dead",
                    "last_heartbeat": null,
                    "scan_interval": 60,
                    "signals_generated": 0,
                    "active_tasks": 0
                }
            ],
            "total_signals_today": 14,
            "active_positions": 3,
            "kill_switch_active": false,
            "last_scan": "2026-08-29T13:55:00Z"
        }"#;

        let state: SwarmState = serde_json::from_str(json).unwrap();
        assert_eq!(state.agents.len(), 2);
        assert_eq!(state.alive_agents(), 1);
        assert_eq!(state.agents[0].name, "scanner-1");
        assert!(!state.kill_switch_active);
    }
}
