//! Emojivoto server binary.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use emojivoto_server::metrics::init_metrics;
use emojivoto_server::{AppState, ServerConfig, run_server_with_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("failed to load configuration")?;
    let addr = config.addr()?;

    tracing::info!(
        "Starting Emojivoto server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        "Vote storage: {:?}, emoji cache: {:?}",
        config.tally_backend,
        config.cache_backend
    );

    let prometheus_handle = init_metrics().context("failed to install metrics recorder")?;

    let state = AppState::bootstrap(&config)
        .await
        .context("failed to initialize backends")?;

    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}
