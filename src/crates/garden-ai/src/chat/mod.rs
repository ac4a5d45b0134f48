//! Chat orchestration: prompt construction, model invocation, and reply
//! normalization.

pub mod parser;
pub mod prompt;
pub mod service;

pub use service::ChatService;
