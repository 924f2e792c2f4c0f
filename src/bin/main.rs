//! Image lookup gateway server.
//!
//! Loads the provider credential from the environment, builds the Pexels
//! provider, and serves the HTTP API until interrupted.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use imagegate::providers::PexelsProvider;
use imagegate::server::{self, AppState};
use imagegate::GatewayConfig;

#[derive(Parser)]
#[command(name = "imagegate")]
#[command(about = "HTTP gateway for stock-photo lookups")]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "IMAGEGATE_BIND", default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // A missing credential is fatal here, never a per-request error.
    let config = GatewayConfig::from_env().context("failed to load configuration")?;

    let provider = PexelsProvider::new(&config.pexels_api_key)
        .context("failed to build Pexels provider")?;

    let state = AppState {
        provider: Arc::new(provider),
    };

    server::serve(cli.bind, state).await?;

    Ok(())
}
