//! Transport and configuration failures surfaced to the caller

use super::common::MockApi;
use external_api_secrets::{ExternalApiProvider, ProviderConfig, ProviderError};
use std::time::Duration;
use tokio::net::TcpListener;

/// Base URL of a port that had a listener and no longer does
async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let provider = ExternalApiProvider::new(&ProviderConfig::new(closed_port_url().await)).unwrap();

    let err = provider.get_secret("k").await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)));

    let err = provider.store_secret("k", "v").await.unwrap_err();
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    // Accepts connections but never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config =
        ProviderConfig::new(format!("http://{addr}")).with_timeout(Duration::from_millis(200));
    let provider = ExternalApiProvider::new(&config).unwrap();

    match provider.get_secret("k").await {
        Err(ProviderError::Network(source)) => assert!(source.is_timeout()),
        other => panic!("Expected network timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_padded_base_url_rejected_at_construction() {
    let api = MockApi::start().await;

    let err = ExternalApiProvider::new(&ProviderConfig::new(format!("{} ", api.base_url())))
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidBaseUrl { .. }));
    assert!(api.store.is_empty().await);
}

#[test]
fn test_invalid_base_url_rejected_at_construction() {
    let err = ExternalApiProvider::new(&ProviderConfig::new("localhost:1234")).unwrap_err();
    assert_eq!(err.kind(), "invalid_base_url");
}
