//! TTL Hash - session cache simulation
//!
//! Runs the session schedule against a TTL table and prints the report.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_hash::{sim, Config};

/// Entry point for the session cache simulation.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the simulation, which opens and closes its own table
/// 4. Print the report as JSON
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_hash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TTL Hash session cache simulation");

    let config = Config::from_env();
    info!(
        "Configuration loaded: bucket_count={}, ttl_max={}, sim_ticks={}",
        config.bucket_count, config.ttl_max, config.sim_ticks
    );

    let report = sim::run(&config).context("session simulation failed")?;

    info!(
        "Total sessions expired/cleaned: {} (hit rate {:.2})",
        report.released,
        report.stats.hit_rate()
    );

    let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
    println!("{json}");

    Ok(())
}
