//! Shared setup for mock server integration tests

use external_api_secrets::{ExternalApiProvider, ProviderConfig};
use mock_server::SecretStore;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// A mock secret API running on an ephemeral port
pub struct MockApi {
    pub addr: SocketAddr,
    pub store: SecretStore,
}

impl MockApi {
    /// Start a mock server with an empty store
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server listener");
        let addr = listener.local_addr().expect("Listener has no local address");
        let store = SecretStore::new();

        tokio::spawn(mock_server::serve(listener, store.clone()));

        Self { addr, store }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn provider(&self) -> ExternalApiProvider {
        ExternalApiProvider::new(&ProviderConfig::new(self.base_url()))
            .expect("Failed to create provider for mock server")
    }
}
