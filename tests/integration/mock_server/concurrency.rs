//! Concurrent operations against a shared provider

use super::common::MockApi;
use external_api_secrets::SecretsClient;
use futures::future::join_all;
use std::sync::Arc;

const TASKS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_store_and_get_no_cross_talk() {
    let api = MockApi::start().await;
    let provider: Arc<dyn SecretsClient> = Arc::new(api.provider());

    let handles = (0..TASKS).map(|i| {
        let provider = Arc::clone(&provider);
        tokio::spawn(async move {
            let key = format!("key-{i}");
            let value = format!("value-{i}");
            provider.store_secret(&key, &value).await.unwrap();
            let fetched = provider.get_secret(&key).await.unwrap();
            (value, fetched)
        })
    });

    for result in join_all(handles).await {
        let (expected, fetched) = result.expect("task panicked");
        assert_eq!(fetched, expected);
    }
    assert_eq!(api.store.len().await, TASKS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reads_match_their_keys() {
    let api = MockApi::start().await;
    for i in 0..TASKS {
        api.store.put(format!("read-{i}"), format!("secret-{i}")).await;
    }

    let provider = api.provider();
    let reads = (0..TASKS).map(|i| {
        let provider = provider.clone();
        async move { (i, provider.get_secret(&format!("read-{i}")).await.unwrap()) }
    });

    for (i, value) in join_all(reads).await {
        assert_eq!(value, format!("secret-{i}"));
    }
}
