//! External Secret API Mock Server
//!
//! A lightweight Axum-based HTTP server that mimics the external secret API:
//!
//! - `GET /secret?key={key}` returns `{"key": "...", "value": "..."}` or 404
//! - `POST /secret` stores a `{"key": "...", "value": "..."}` body
//! - `GET /health` for readiness checks
//!
//! Secrets live in an in-memory store, so a stored value is echoed back on
//! the next read. Integration tests bind the router to an ephemeral port.

pub mod errors;
pub mod handlers;
pub mod store;

pub use handlers::router;
pub use store::SecretStore;

use tokio::net::TcpListener;

/// Serve the mock API on an already-bound listener until the task is dropped
pub async fn serve(listener: TcpListener, store: SecretStore) -> std::io::Result<()> {
    axum::serve(listener, router(store)).await
}
