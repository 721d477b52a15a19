use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Liveness probe; never looks at the store.
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response()
}
