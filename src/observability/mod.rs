//! # Observability
//!
//! Prometheus metrics for provider requests. Logging goes through `tracing`;
//! binaries install the subscriber.

pub mod metrics;
