//! Error response formatting
//!
//! Format: `{"error": {"code": 404, "message": "..."}}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Build a JSON error response with the given status
pub fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message
            }
        })),
    )
        .into_response()
}
