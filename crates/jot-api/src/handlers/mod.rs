//! HTTP handlers, grouped by resource.

pub mod archive;
pub mod notes;
pub mod tags;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::AppState;

/// Liveness and database connectivity check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok" })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "degraded", "error": err.to_string() })),
        ),
    }
}
