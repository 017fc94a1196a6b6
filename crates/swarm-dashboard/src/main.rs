//! Swarm dashboard: terminal monitor for a multi-agent trading swarm.
//!
//! Usage:
//!   swarm-dashboard [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>     Config file path (default: config/dashboard.toml)
//!   --url <URL>             Backend base URL (overrides config)
//!   --days <N>              Days of portfolio history to fetch
//!   --level <LEVEL>         Log level (trace, debug, info, warn, error)
//!   --scan <SYMBOLS>        Trigger a scan on startup (comma-separated)

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use swarm_dashboard::api::{ApiClient, SwarmApi};
use swarm_dashboard::config::SwarmConfig;
use swarm_dashboard::equity::{project, CanvasGeometry};
use swarm_dashboard::risk::classify;
use swarm_dashboard::sync::{SwarmSynchronizer, SyncError};

/// CLI arguments for the dashboard monitor.
#[derive(Parser, Debug)]
#[command(name = "swarm-dashboard")]
#[command(about = "Terminal monitor for a multi-agent trading swarm")]
#[command(version)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config/dashboard.toml")]
    config: PathBuf,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    url: Option<String>,

    /// Days of portfolio history to fetch
    #[arg(long)]
    days: Option<u32>,

    /// Log level
    #[arg(long)]
    level: Option<String>,

    /// Trigger a scan on startup, comma-separated symbols
    #[arg(long, value_delimiter = ',')]
    scan: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let args = Args::parse();

    let mut config = if args.config.exists() {
        SwarmConfig::from_file(&args.config)
            .with_context(|| format!("Failed to load config from {:?}", args.config))?
    } else {
        SwarmConfig::default()
    };
    config.apply_env_overrides();

    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(days) = args.days {
        config.performance_days = days;
    }
    if let Some(level) = args.level {
        config.log_level = level;
    }
    config.validate()?;

    let level = Level::from_str(&config.log_level)
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!(base_url = %config.base_url, "connecting to swarm backend");

    let client = Arc::new(
        ApiClient::with_timeout(
            config.base_url.clone(),
            config.auth_token.clone(),
            config.request_timeout,
        )
        .context("Failed to build API client")?,
    );

    // One-shot portfolio fetch; polling only covers status and signals.
    match client.performance(config.performance_days).await {
        Ok(response) => {
            let geometry = CanvasGeometry::default();
            match project(&response.data, &geometry) {
                Some(curve) => info!(
                    strategy = %response.strategy_id,
                    days = response.days,
                    points = curve.points.len(),
                    trend = ?curve.trend,
                    "portfolio curve projected"
                ),
                None => info!("no portfolio history yet"),
            }
        }
        Err(e) => warn!(error = %e, "performance fetch failed"),
    }

    let synchronizer = Arc::new(SwarmSynchronizer::new(
        client.clone() as Arc<dyn SwarmApi>,
        config.sync_config(),
    ));
    synchronizer.start();

    if let Some(symbols) = args.scan {
        match synchronizer.trigger_scan(&symbols).await {
            Ok(_) => info!("startup scan triggered"),
            Err(SyncError::ScanInProgress) => warn!("scan already in progress"),
            Err(e) => warn!(error = %e, "startup scan failed"),
        }
    }

    // Log a snapshot summary until interrupted.
    let mut ticker = tokio::time::interval(Duration::from_secs(5));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                log_snapshot(&synchronizer, config.max_positions);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
        }
    }

    synchronizer.stop();
    Ok(())
}

fn log_snapshot(synchronizer: &SwarmSynchronizer, max_positions: u32) {
    let snapshot = synchronizer.snapshot();
    match &snapshot.swarm {
        Some(swarm) => {
            let risk = classify(swarm.kill_switch_active, swarm.active_positions, max_positions);
            for agent in &swarm.agents {
                if !agent.status.is_operational() {
                    warn!(
                        agent = %agent.name,
                        status = %agent.status,
                        indicator = agent.status.symbol(),
                        "agent down"
                    );
                }
            }
            info!(
                agents_alive = swarm.alive_agents(),
                agents_total = swarm.agents.len(),
                signals_today = swarm.total_signals_today,
                signals_held = snapshot.signals.len(),
                risk = %risk.level,
                exposure_pct = risk.exposure_pct,
                scanning = snapshot.scanning,
                "swarm snapshot"
            );
        }
        None => info!("waiting for first swarm status"),
    }
}
