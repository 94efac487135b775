//! # Provider Modules
//!
//! The capability a host operator registers: fetch a secret by key and
//! store a secret by key/value. `ExternalApiProvider` implements it against
//! an external HTTP API.

use async_trait::async_trait;

pub mod error;
pub mod external_api;

pub use error::{Operation, ProviderError};
pub use external_api::{create_external_api_provider, ExternalApiProvider, SecretEntry};

/// Capability interface handed to a host operator's provider registry
#[async_trait]
pub trait SecretsClient: Send + Sync {
    /// Get the value stored under `key`
    async fn get_secret(&self, key: &str) -> Result<String, ProviderError>;

    /// Store `value` under `key`
    async fn store_secret(&self, key: &str, value: &str) -> Result<(), ProviderError>;
}
