//! Remote LLM providers reached over HTTPS.

pub mod gemini;

pub use gemini::{GeminiClient, GEMINI_BASE_URL};
