use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, StoreKind};

pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod error;
pub(crate) mod mock;
pub(crate) mod models;
pub(crate) mod server;

#[cfg(test)]
mod tests;

/// Academic resource sharing service.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// YAML configuration file, skipped when missing
    #[arg(long, env = "VRS_CONFIG", default_value = "config.yaml")]
    config: PathBuf,
    /// Bind address, overrides the configuration
    #[arg(long)]
    address: Option<String>,
    /// Backing store for the resource endpoints
    #[arg(long, value_enum, default_value_t = StoreKind::Mongo)]
    store: StoreKind,
    /// Artificial latency of the mock API in demo mode
    #[arg(long)]
    mock_latency_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(address) = cli.address {
        config.server.address = address;
    }
    if let Some(latency_ms) = cli.mock_latency_ms {
        config.mock.latency_ms = latency_ms;
    }
    server::run_all(&config, cli.store).await?;

    Ok(())
}
