//! Smart garden AI chat service.
//!
//! A request-routing adapter between an upstream orchestration caller and a
//! large-language-model provider. It accepts a chat request carrying the
//! garden's live sensor state and weather forecast, renders a system prompt
//! encoding the watering policy, invokes the model once, and normalizes the
//! free-form reply into exactly one of two typed outcomes: a plain `TEXT`
//! answer or a structured `controlDevice` `TOOL_CALL`.
//!
//! Control flow per request is strictly linear: validate, render prompt,
//! call model, parse output, respond. There is no storage and no shared
//! mutable state across requests; the model client and its configuration
//! are built once at startup and shared immutably.

pub mod api;
pub mod chat;
pub mod config;
pub mod version;

pub use api::models::{ChatReply, ChatRequest, ResponseType, ToolInvocation};
pub use api::routes::create_router;
pub use chat::ChatService;
pub use config::ServerConfig;
