//! CarbonShift Simulator API
//!
//! HTTP service that estimates carbon emissions and cost for a cloud
//! workload and compares them across regions, recommending the best
//! trade-off for the caller's priorities.

use anyhow::Result;
use sim_lib::{Simulator, StaticCatalog, TemplateInsights};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod health;
mod metrics;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting carbonshift-api");

    let config = config::ApiConfig::load()?;
    info!(port = config.api_port, "Service configured");

    // Reference data is loaded once and shared read-only across requests
    let catalog = Arc::new(StaticCatalog::new());
    let simulator = Arc::new(Simulator::new(catalog));
    let insights = Arc::new(TemplateInsights);
    let api_metrics = metrics::ApiMetrics::new();

    let app_state = Arc::new(routes::AppState::new(
        simulator,
        insights,
        Duration::from_secs(config.insight_timeout_secs),
        api_metrics,
    ));

    let api_handle = tokio::spawn(routes::serve(config.api_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
