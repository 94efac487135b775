//! # HTTP Client Creation
//!
//! Validates the base URL and builds the reqwest client (rustls).

use crate::config::ProviderConfig;
use crate::provider::ProviderError;
use reqwest::{Client, Url};

/// Build the user-agent string from crate version
fn user_agent() -> String {
    format!("external-api-secrets/{}", env!("CARGO_PKG_VERSION"))
}

/// Check that the base URL is an absolute http(s) URL and return it parsed
///
/// `Url::parse` silently drops surrounding whitespace and embedded tabs or
/// newlines, so such input is rejected up front rather than cleaned.
pub(crate) fn validate_base_url(base_url: &str) -> Result<Url, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    if base_url
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(invalid(
            "whitespace and control characters are not allowed".to_string(),
        ));
    }

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(url)
}

/// Create the HTTP client for a provider
pub(crate) fn create_http_client(config: &ProviderConfig) -> Result<Client, ProviderError> {
    let mut builder = Client::builder().user_agent(user_agent());
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ProviderError::ClientBuild)
}
