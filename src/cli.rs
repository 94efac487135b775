//! # EAPCTL CLI
//!
//! Command-line interface for the external API secrets provider.
//!
//! ## Usage
//!
//! ```bash
//! # Read a secret
//! eapctl --base-url https://example.com/secrets get db-password
//!
//! # Store a secret (base URL from EXTERNAL_API_BASE_URL)
//! eapctl put db-password hunter2
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use external_api_secrets::constants::{BASE_URL_ENV, DEFAULT_LOG_FILTER};
use external_api_secrets::{create_external_api_provider, ProviderConfig, SecretsClient};
use std::time::Duration;
use tracing::{info, warn};

/// External API secrets provider CLI
#[derive(Parser, Debug)]
#[command(name = "eapctl")]
#[command(about = "Fetch and store secrets through the external secret API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the secret API (defaults to EXTERNAL_API_BASE_URL)
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds, 0 for none (defaults to EXTERNAL_API_TIMEOUT_SECS)
    #[arg(short, long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// Secret key
        key: String,
    },
    /// Store a value under a key
    Put {
        /// Secret key
        key: String,
        /// Secret value
        value: String,
    },
}

/// Build the provider config, with command-line flags taking precedence over `lookup`
fn resolve_config(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<ProviderConfig> {
    let mut config = ProviderConfig::from_lookup(|key| match (key, &cli.base_url) {
        (BASE_URL_ENV, Some(base_url)) => Some(base_url.clone()),
        _ => lookup(key),
    })
    .context("No base URL given; pass --base-url")?;

    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Required for rustls 0.23+ when no default provider is set via features
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider already installed");
    }

    let cli = Cli::parse();
    let config = resolve_config(&cli, |key| std::env::var(key).ok())?;
    let client = create_external_api_provider(&config)?;

    match cli.command {
        Commands::Get { key } => {
            let value = client
                .get_secret(&key)
                .await
                .with_context(|| format!("Failed to get secret {key}"))?;
            println!("{value}");
        }
        Commands::Put { key, value } => {
            client
                .store_secret(&key, &value)
                .await
                .with_context(|| format!("Failed to store secret {key}"))?;
            info!("Stored secret {}", key);
        }
    }

    Ok(())
}
