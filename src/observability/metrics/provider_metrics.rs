//! # Provider Metrics
//!
//! Request counts by operation and outcome, and request latency by operation.

use super::registry::register_once;
use crate::provider::{Operation, ProviderError};
use anyhow::Result;
use prometheus::{HistogramVec, IntCounterVec};
use std::sync::LazyLock;
use std::time::Duration;

/// Outcome label for successful requests
pub const OUTCOME_SUCCESS: &str = "success";

static PROVIDER_REQUESTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "external_api_requests_total",
            "Total number of external secret API operations",
        ),
        &["operation", "outcome"],
    )
    .expect("Failed to create PROVIDER_REQUESTS_TOTAL metric - this should never happen")
});

static PROVIDER_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "external_api_request_duration_seconds",
            "Duration of external secret API operations in seconds",
        )
        .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 30.0]),
        &["operation"],
    )
    .expect("Failed to create PROVIDER_REQUEST_DURATION metric - this should never happen")
});

/// Register provider metrics with the registry
pub(crate) fn register_provider_metrics() -> Result<()> {
    register_once(Box::new(PROVIDER_REQUESTS_TOTAL.clone()))?;
    register_once(Box::new(PROVIDER_REQUEST_DURATION.clone()))?;
    Ok(())
}

/// Record one provider operation
pub fn observe_request(operation: Operation, error: Option<&ProviderError>, elapsed: Duration) {
    let outcome = error.map_or(OUTCOME_SUCCESS, ProviderError::kind);
    PROVIDER_REQUESTS_TOTAL
        .with_label_values(&[operation.as_str(), outcome])
        .inc();
    PROVIDER_REQUEST_DURATION
        .with_label_values(&[operation.as_str()])
        .observe(elapsed.as_secs_f64());
}

/// Current count for an operation/outcome pair
#[cfg(test)]
pub(crate) fn requests_total(operation: Operation, outcome: &str) -> u64 {
    PROVIDER_REQUESTS_TOTAL
        .with_label_values(&[operation.as_str(), outcome])
        .get()
}
