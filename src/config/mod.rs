//! # Provider Configuration
//!
//! Provider-level configuration loaded from environment variables.
//!
//! The base URL has no sensible default and must be provided. The request
//! timeout is optional; when unset the HTTP transport's default applies.

mod provider;

pub use provider::ProviderConfig;
