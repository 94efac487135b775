//! External API Secrets Provider Library
//!
//! Fetches and stores key/value secrets through an external HTTP API on
//! behalf of a host secrets operator. The host registers the provider under
//! [`constants::PROVIDER_NAME`] and calls the two operations of
//! [`SecretsClient`].

pub mod config;
pub mod constants;
pub mod observability;
pub mod provider;

pub use config::ProviderConfig;
pub use provider::{
    create_external_api_provider, ExternalApiProvider, Operation, ProviderError, SecretEntry,
    SecretsClient,
};
