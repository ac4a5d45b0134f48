//! Chat model trait and message types.
//!
//! The service talks to its LLM provider through the [`ChatModel`] trait so
//! the concrete client can be swapped for a mock in tests. Each request is a
//! fresh, single conversational turn; no history is retained between calls.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role of a message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions / persona.
    System,
    /// Message authored by the end user.
    Human,
    /// Message produced by the model.
    Assistant,
}

/// A single conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: MessageRole,
    /// Plain text content.
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a human (user) message.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Human,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// The text content of this message.
    pub fn text(&self) -> &str {
        &self.content
    }
}

/// A request to a chat model containing messages and generation settings.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The conversation messages to send to the model.
    pub messages: Vec<Message>,

    /// Sampling temperature override; the provider default applies when unset.
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a new chat request with the given messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: None,
        }
    }

    /// Set the temperature for generation.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Token usage statistics reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: usize,
    /// Tokens produced in the completion.
    pub completion_tokens: usize,
}

impl UsageMetadata {
    /// Create usage metadata from prompt/completion counts.
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    /// Total tokens across prompt and completion.
    pub fn total_tokens(&self) -> usize {
        self.prompt_tokens + self.completion_tokens
    }
}

/// A complete response from a chat model.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub message: Message,

    /// Token usage, when the provider reports it.
    pub usage: Option<UsageMetadata>,

    /// Provider-specific metadata (model name, finish reason, ...).
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Core trait for chat-based language models.
///
/// Implementations handle converting messages to the provider's wire format,
/// making the API call, and mapping the response back. Implementations must
/// be `Send + Sync`; share them across handlers as `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a complete chat response from messages.
    ///
    /// One request, one provider call: retry and timeout policy, if any, is
    /// the caller's concern.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}
