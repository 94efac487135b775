//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use anyhow::{Context, Result};
use prometheus::{Registry, TextEncoder};
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Safe to call more than once; metrics already registered are skipped.
///
/// # Errors
///
/// Returns an error if a metric is rejected by the registry for any reason
/// other than being registered already.
pub fn register_metrics() -> Result<()> {
    super::provider_metrics::register_provider_metrics()
}

/// Render every registered metric in the Prometheus text format
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn gather_metrics() -> Result<String> {
    TextEncoder::new()
        .encode_to_string(&REGISTRY.gather())
        .context("Failed to encode metrics")
}

/// Register a collector, treating a duplicate registration as success
pub(crate) fn register_once(collector: Box<dyn prometheus::core::Collector>) -> Result<()> {
    match REGISTRY.register(collector) {
        Ok(()) | Err(prometheus::Error::AlreadyReg) => Ok(()),
        Err(e) => Err(e).context("Failed to register metric"),
    }
}
