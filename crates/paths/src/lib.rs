//! Shared API path definitions for the external secret API
//!
//! This crate centralizes the API paths to ensure consistency
//! between the provider client and the mock server implementation.
//!
//! Route constants are string literals because Axum routes require them.

/// Route serving both secret operations
///
/// - `GET /secret?key={key}` reads a secret
/// - `POST /secret` stores a secret
pub const SECRET_ROUTE: &str = "/secret";

/// Query parameter carrying the secret key on reads
pub const KEY_QUERY_PARAM: &str = "key";

/// Health check route exposed by the mock server
pub const HEALTH_ROUTE: &str = "/health";

/// Build the secret endpoint URL for a base URL
///
/// A trailing slash on the base URL is dropped and the route is appended
/// as text, so any path prefix on the base URL is kept.
pub fn secret_url(base_url: &str) -> String {
    format!("{}{SECRET_ROUTE}", base_url.trim_end_matches('/'))
}
