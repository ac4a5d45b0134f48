//! LLM provider client for the garden-ai service.
//!
//! This crate provides the [`ChatModel`] trait used by the service to talk to
//! a large-language-model provider, plus the concrete Gemini implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::{GeminiClient, GEMINI_BASE_URL};
//! use llm::{ChatModel, ChatRequest, Message, RemoteLlmConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::from_env(
//!         "GEMINI_API_KEY",
//!         GEMINI_BASE_URL,
//!         "gemini-flash-latest",
//!     )?
//!     .with_temperature(0.7);
//!     let client = GeminiClient::new(config);
//!
//!     let request = ChatRequest::new(vec![Message::human("How is my garden?")]);
//!     let response = client.chat(request).await?;
//!     println!("{}", response.message.text());
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod remote;

pub use chat::{ChatModel, ChatRequest, ChatResponse, Message, MessageRole, UsageMetadata};
pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};
