//! garden-ai server binary
//!
//! Standalone HTTP service exposing the chat adapter. Startup is fatal when
//! the Gemini API key is absent; everything after startup degrades to
//! normalized in-body errors instead of crashing the handler.

use std::net::SocketAddr;
use std::sync::Arc;

use garden_ai::api::routes::create_router;
use garden_ai::chat::ChatService;
use garden_ai::config::ServerConfig;
use llm::remote::GeminiClient;
use llm::RemoteLlmConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    // Load configuration (defaults when no file is present)
    let config = ServerConfig::load()?;
    tracing::info!("Model: {} (temperature {})", config.model.name, config.model.temperature);

    // The API key must be available at startup; a missing key is fatal here,
    // never a per-request error.
    let llm_config = RemoteLlmConfig::from_env(
        "GEMINI_API_KEY",
        config.model.base_url.clone(),
        config.model.name.clone(),
    )
    .map_err(|e| anyhow::anyhow!("GEMINI_API_KEY is required: {}", e))?
    .with_temperature(config.model.temperature);

    let model = Arc::new(GeminiClient::new(llm_config));
    let chat = Arc::new(ChatService::new(model));
    let app = create_router(chat, &config.model.name);

    // Environment overrides for the listen address
    let host = std::env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("garden-ai server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
