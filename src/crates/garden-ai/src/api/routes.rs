//! API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers;
use crate::chat::ChatService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The chat orchestration service.
    pub chat: Arc<ChatService>,
    /// Configured model name, reported by the health endpoint.
    pub model_name: Arc<str>,
}

/// Build the complete API router.
pub fn create_router(chat: Arc<ChatService>, model_name: &str) -> Router {
    let app_state = AppState {
        chat,
        model_name: Arc::from(model_name),
    };

    Router::new()
        .route("/chat", post(handlers::handle_chat))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
