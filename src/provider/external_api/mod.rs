//! # External API Secrets Provider
//!
//! Reads and writes secrets through a plain HTTP API:
//!
//! - `GET {base_url}/secret?key={key}` returns `{"key": "...", "value": "..."}`
//! - `POST {base_url}/secret` with the same JSON shape stores a secret
//!
//! Anything other than `200 OK` is an error. There is no caching and no
//! retry; each call is one request/response cycle and the first failure is
//! returned to the caller. The provider holds no mutable state and can be
//! shared across tasks.

mod client;
mod types;

pub use types::SecretEntry;

use self::client::{create_http_client, validate_base_url};
use self::types::StoreSecretRequest;
use crate::config::ProviderConfig;
use crate::constants::JSON_CONTENT_TYPE;
use crate::observability::metrics;
use crate::provider::{Operation, ProviderError, SecretsClient};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use tracing::{debug, info};

/// External API secrets provider
#[derive(Debug, Clone)]
pub struct ExternalApiProvider {
    http_client: Client,
    secret_url: String,
}

impl ExternalApiProvider {
    /// Create a provider for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseUrl` if the base URL is not an absolute http(s)
    /// URL, or `ClientBuild` if the HTTP client cannot be created.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = validate_base_url(&config.base_url)?;
        let http_client = create_http_client(config)?;

        Ok(Self {
            http_client,
            secret_url: paths::secret_url(base_url.as_str()),
        })
    }

    /// Get the value stored under `key`
    ///
    /// # Errors
    ///
    /// - `InvalidKey` for an empty key (no request is sent)
    /// - `Network` if the request or body read fails
    /// - `HttpStatus` for any status other than 200; the body is not parsed
    /// - `Serialization` if the body is not `{"key": string, "value": string}`
    pub async fn get_secret(&self, key: &str) -> Result<String, ProviderError> {
        let started = Instant::now();
        let result = self.fetch(key).await;
        metrics::observe_request(Operation::GetSecret, result.as_ref().err(), started.elapsed());
        result
    }

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// - `InvalidKey` for an empty key (no request is sent)
    /// - `Serialization` if the payload cannot be encoded
    /// - `Network` if the request fails
    /// - `HttpStatus` for any status other than 200
    pub async fn store_secret(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        let started = Instant::now();
        let result = self.store(key, value).await;
        metrics::observe_request(Operation::StoreSecret, result.as_ref().err(), started.elapsed());
        result
    }

    async fn fetch(&self, key: &str) -> Result<String, ProviderError> {
        validate_key(key)?;

        debug!(url = %self.secret_url, key, "GET secret");
        let response = self
            .http_client
            .get(&self.secret_url)
            .query(&[(paths::KEY_QUERY_PARAM, key)])
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status = response.status();
        debug!(key, %status, "GET secret response");
        if status != StatusCode::OK {
            return Err(ProviderError::HttpStatus {
                operation: Operation::GetSecret,
                status,
            });
        }

        let body = response.bytes().await.map_err(ProviderError::Network)?;
        let entry: SecretEntry =
            serde_json::from_slice(&body).map_err(ProviderError::Serialization)?;

        Ok(entry.value)
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        validate_key(key)?;

        let payload = serde_json::to_vec(&StoreSecretRequest { key, value })
            .map_err(ProviderError::Serialization)?;

        debug!(url = %self.secret_url, key, "POST secret");
        let response = self
            .http_client
            .post(&self.secret_url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status = response.status();
        debug!(key, %status, "POST secret response");
        if status != StatusCode::OK {
            return Err(ProviderError::HttpStatus {
                operation: Operation::StoreSecret,
                status,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl SecretsClient for ExternalApiProvider {
    async fn get_secret(&self, key: &str) -> Result<String, ProviderError> {
        ExternalApiProvider::get_secret(self, key).await
    }

    async fn store_secret(&self, key: &str, value: &str) -> Result<(), ProviderError> {
        ExternalApiProvider::store_secret(self, key, value).await
    }
}

fn validate_key(key: &str) -> Result<(), ProviderError> {
    if key.is_empty() {
        return Err(ProviderError::InvalidKey);
    }
    Ok(())
}

/// Create an external API secrets provider
///
/// The returned capability is what a host operator registers under
/// [`PROVIDER_NAME`](crate::constants::PROVIDER_NAME).
///
/// # Errors
///
/// Returns an error if the provider cannot be constructed from `config`.
pub fn create_external_api_provider(config: &ProviderConfig) -> Result<Box<dyn SecretsClient>> {
    info!("Using external API secrets provider: base_url={}", config.base_url);
    let provider = ExternalApiProvider::new(config)
        .with_context(|| format!("Failed to create provider for {}", config.base_url))?;
    Ok(Box::new(provider))
}
