//! In-memory secret store backing the mock server
//!
//! Flat key/value map, last write wins. Cloning the store shares the map.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared in-memory secret store
#[derive(Clone, Debug, Default)]
pub struct SecretStore {
    secrets: Arc<RwLock<HashMap<String, String>>>,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`
    pub async fn get(&self, key: &str) -> Option<String> {
        self.secrets.read().await.get(key).cloned()
    }

    /// Store `value` under `key`
    ///
    /// Returns true if an existing value was overwritten.
    pub async fn put(&self, key: String, value: String) -> bool {
        self.secrets.write().await.insert(key, value).is_some()
    }

    pub async fn len(&self) -> usize {
        self.secrets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.secrets.read().await.is_empty()
    }
}
