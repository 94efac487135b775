//! # Provider Error Types
//!
//! Every failure is returned to the caller as-is. Nothing here retries,
//! swallows or logs; the host operator decides how to react.

use reqwest::StatusCode;
use thiserror::Error;

/// The two operations exposed to a host operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetSecret,
    StoreSecret,
}

impl Operation {
    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::GetSecret => "get_secret",
            Operation::StoreSecret => "store_secret",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Operation::GetSecret => "retrieve",
            Operation::StoreSecret => "store",
        }
    }
}

/// Errors returned by the external API secrets provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("secret key must not be empty")]
    InvalidKey,

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport failure: unreachable host, timeout, reset, truncated body
    #[error("network error communicating with the secret API")]
    Network(#[source] reqwest::Error),

    /// The secret API answered with anything other than 200 OK
    #[error("failed to {} secret: {status}", .operation.verb())]
    HttpStatus {
        operation: Operation,
        status: StatusCode,
    },

    /// Local JSON encode/decode failure
    #[error("invalid secret payload")]
    Serialization(#[source] serde_json::Error),
}

impl ProviderError {
    /// Stable label for metrics and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::InvalidKey => "invalid_key",
            ProviderError::InvalidBaseUrl { .. } => "invalid_base_url",
            ProviderError::ClientBuild(_) => "client_build",
            ProviderError::Network(_) => "network",
            ProviderError::HttpStatus { .. } => "http_status",
            ProviderError::Serialization(_) => "serialization",
        }
    }

    /// HTTP status returned by the secret API, if that is what failed
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
