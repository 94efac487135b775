//! External Secret API Mock Server
//!
//! Environment Variables:
//! - PORT: Port to listen on (default: 1234)
//! - RUST_LOG: Log filter (default: external_api_mock_server=info,mock_server=info)

use anyhow::{Context, Result};
use mock_server::SecretStore;
use std::env;
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "external_api_mock_server=info,mock_server=info".into()),
        )
        .with_target(false)
        .init();

    let port = env::var("PORT")
        .unwrap_or_else(|_| "1234".to_string())
        .parse::<u16>()
        .context("PORT must be a valid u16")?;

    info!("Starting external secret API mock server...");

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Mock server ready at http://{}", addr);

    mock_server::serve(listener, SecretStore::new())
        .await
        .context("Mock server terminated")
}
