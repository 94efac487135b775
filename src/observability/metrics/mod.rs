//! # Metrics Module
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and text exposition
//! - `provider_metrics` - Request counts and latencies per provider operation

pub mod provider_metrics;
pub mod registry;

pub use provider_metrics::*;
pub use registry::*;
