//! API data transfer objects (DTOs) and response models.

pub mod chat;

pub use chat::{
    ChatReply, ChatRequest, DeviceState, ResponseType, SensorReading, ToolInvocation,
    WeatherContext,
};

/// System health response.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Configured model name
    pub model: String,

    /// API version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,
}

impl HealthResponse {
    /// Create a new health response.
    pub fn new(status: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            model: model.into(),
            version: crate::version::VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
