//! Route handlers for the mock secret API

use crate::errors::error_response;
use crate::store::SecretStore;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Wire shape shared by reads and writes
#[derive(Debug, Serialize, Deserialize)]
pub struct SecretBody {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyQuery {
    key: Option<String>,
}

/// Build the mock API router over `store`
pub fn router(store: SecretStore) -> Router {
    Router::new()
        .route(paths::HEALTH_ROUTE, get(health_check))
        .route(paths::SECRET_ROUTE, get(get_secret).post(store_secret))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(store)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// GET /secret?key={key}
async fn get_secret(State(store): State<SecretStore>, Query(query): Query<KeyQuery>) -> Response {
    let Some(key) = query.key.filter(|k| !k.is_empty()) else {
        warn!("  GET secret without key");
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("missing query parameter: {}", paths::KEY_QUERY_PARAM),
        );
    };

    match store.get(&key).await {
        Some(value) => {
            info!("  GET secret: key={}", key);
            Json(SecretBody { key, value }).into_response()
        }
        None => {
            warn!("  Secret not found in store: {}", key);
            error_response(StatusCode::NOT_FOUND, format!("Secret not found: {key}"))
        }
    }
}

/// POST /secret
async fn store_secret(State(store): State<SecretStore>, Json(body): Json<SecretBody>) -> Response {
    if body.key.is_empty() {
        warn!("  POST secret with empty key");
        return error_response(StatusCode::BAD_REQUEST, "secret key must not be empty".to_string());
    }

    let overwritten = store.put(body.key.clone(), body.value).await;
    info!("  STORE secret: key={}, overwritten={}", body.key, overwritten);
    StatusCode::OK.into_response()
}
