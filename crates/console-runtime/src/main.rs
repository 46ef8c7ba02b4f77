//! Gangway device console daemon.

use anyhow::{Context, Result};
use console_runtime::{ConsoleConfig, ConsoleService};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let config = ConsoleConfig::load();

    info!(
        version = console_runtime::VERSION,
        addr = %config.http_addr(),
        "Gangway console starting"
    );
    if config.filter.disable_filter {
        warn!("origin filtering is disabled; the console is reachable from any network");
    }

    let service = ConsoleService::new(config).context("invalid configuration")?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(());
        }
    });

    service
        .start(shutdown_rx)
        .await
        .context("console server failed")?;

    Ok(())
}
