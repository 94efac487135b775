//! # External API Provider Configuration

use crate::constants::{BASE_URL_ENV, TIMEOUT_SECS_ENV};
use anyhow::{bail, Result};
use std::time::Duration;

/// Configuration for the external API secrets provider
///
/// Fixed once a provider is constructed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Root address of the external secret API (e.g. `https://example.com/secrets`)
    pub base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `EXTERNAL_API_BASE_URL` is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any variable source keyed by environment variable name
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL variable is missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => bail!("{BASE_URL_ENV} must be set to the external secret API base URL"),
        };

        Ok(Self {
            base_url,
            request_timeout: timeout_from_lookup(&lookup),
        })
    }
}

/// Parse the timeout variable; unparsable or zero values fall back to no timeout
fn timeout_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Duration> {
    let secs: u64 = env_var_or_default(&lookup, TIMEOUT_SECS_ENV, 0);
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
