//! Health check endpoint handler.

use axum::{extract::State, Json};

use crate::api::models::HealthResponse;
use crate::api::routes::AppState;

/// Handler for GET /health
///
/// Returns service status and the configured model name.
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("ok", &*app_state.model_name))
}
