//! API endpoint handlers.

pub mod chat;
pub mod health;

pub use chat::handle_chat;
pub use health::health;
