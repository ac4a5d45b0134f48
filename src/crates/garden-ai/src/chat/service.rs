//! Chat orchestration service.
//!
//! One request flows straight through: render prompt, call the model once,
//! normalize the output. The service always produces a well-formed
//! [`ChatReply`]; model and extraction failures are folded into a TEXT reply
//! carrying the error detail, never surfaced as a transport error.

use std::sync::Arc;

use llm::{ChatModel, ChatRequest as ModelRequest, Message};
use tracing::{error, info};

use crate::api::models::{ChatReply, ChatRequest};
use crate::chat::parser::normalize_reply;
use crate::chat::prompt::render_system_prompt;

/// Orchestrates a single chat turn against the configured model.
///
/// Holds only immutable state; safe to share across requests.
#[derive(Clone)]
pub struct ChatService {
    model: Arc<dyn ChatModel>,
}

impl ChatService {
    /// Create a new chat service backed by the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Handle one validated chat request end to end.
    ///
    /// The request must already have passed [`ChatRequest::validate`]. Every
    /// outcome, including a failed model call, is a well-formed reply.
    pub async fn handle(&self, request: &ChatRequest) -> ChatReply {
        // The prompt carries the host's local calendar date.
        let system_prompt =
            render_system_prompt(request, chrono::Local::now().date_naive());

        // The model is called with a single combined turn; every request
        // starts a fresh conversation.
        let turn = format!("{}\n\nUSER: {}", system_prompt, request.user_message());
        let model_request = ModelRequest::new(vec![Message::human(turn)]);

        match self.model.chat(model_request).await {
            Ok(response) => {
                let text = response.message.text();
                match normalize_reply(text) {
                    Ok(reply) => {
                        info!(
                            device_uid = %request.device_uid(),
                            response_type = ?reply.response_type,
                            "chat turn completed"
                        );
                        reply
                    }
                    Err(e) => {
                        error!("failed to normalize model reply: {}", e);
                        apology_reply(&e.to_string())
                    }
                }
            }
            Err(e) => {
                error!("model invocation failed: {}", e);
                apology_reply(&e.to_string())
            }
        }
    }
}

/// The localized apology returned when anything in the model round-trip
/// fails. Carries the underlying error detail for the caller.
fn apology_reply(detail: &str) -> ChatReply {
    ChatReply::text(format!(
        "Xin lỗi, tôi gặp lỗi khi xử lý yêu cầu AI: {}",
        detail
    ))
}
