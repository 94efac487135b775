//! Provider integration tests against the mock secret API

pub mod common;
pub mod concurrency;
pub mod errors;
pub mod round_trip;
