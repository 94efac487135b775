//! # Constants
//!
//! Names and defaults shared across the provider, configuration and CLI.

/// Name the provider is registered under with a host operator
pub const PROVIDER_NAME: &str = "external-api";

/// Environment variable holding the base URL of the external secret API
pub const BASE_URL_ENV: &str = "EXTERNAL_API_BASE_URL";

/// Environment variable holding the request timeout in seconds (0 or unset = transport default)
pub const TIMEOUT_SECS_ENV: &str = "EXTERNAL_API_TIMEOUT_SECS";

/// Content type sent with secret writes
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "external_api_secrets=info,eapctl=info";
