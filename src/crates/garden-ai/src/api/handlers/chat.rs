//! Chat endpoint handler.

use axum::{extract::State, Json};

use crate::api::error::ApiResult;
use crate::api::models::{ChatReply, ChatRequest};
use crate::api::routes::AppState;

/// Handler for POST /chat
///
/// Validates the request, then delegates to the chat service. Validation
/// failures are rejected before any model call; once past validation the
/// response is always 200 with a normalized [`ChatReply`] body, even when
/// the model call fails.
pub async fn handle_chat(
    State(app_state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    request.validate()?;

    tracing::debug!(device_uid = %request.device_uid(), "received chat request");

    let reply = app_state.chat.handle(&request).await;
    Ok(Json(reply))
}
