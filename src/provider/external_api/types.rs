//! # Wire Types
//!
//! JSON payloads exchanged with the external secret API. Both directions use
//! the same flat shape: `{"key": "...", "value": "..."}`.

use serde::{Deserialize, Serialize};

/// A secret as returned by `GET /secret?key={key}`
///
/// Both fields are required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub key: String,
    pub value: String,
}

/// Request body for `POST /secret`
#[derive(Debug, Serialize)]
pub(crate) struct StoreSecretRequest<'a> {
    pub key: &'a str,
    pub value: &'a str,
}
