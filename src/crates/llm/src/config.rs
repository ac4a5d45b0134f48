//! Configuration for remote LLM providers.

use crate::error::{LlmError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a remote LLM provider.
///
/// Built once at process startup and never mutated afterwards; the client
/// holding it is shared immutably across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteLlmConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Base URL for the API.
    ///
    /// Example (Gemini): "https://generativelanguage.googleapis.com/v1beta"
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Default sampling temperature applied when a request does not set one.
    pub temperature: Option<f32>,
}

impl RemoteLlmConfig {
    /// Create a new remote LLM configuration.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Create configuration from an environment variable holding the API key.
    ///
    /// A missing key is a configuration error; callers treat it as fatal at
    /// startup rather than deferring the failure to the first request.
    pub fn from_env(
        env_var: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let api_key = std::env::var(env_var)
            .map_err(|_| LlmError::ApiKeyNotFound(format!("Environment variable: {}", env_var)))?;

        Ok(Self::new(api_key, base_url, model))
    }

    /// Set the default sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RemoteLlmConfig::new(
            "test-key",
            "https://generativelanguage.googleapis.com/v1beta",
            "gemini-flash-latest",
        )
        .with_temperature(0.7);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gemini-flash-latest");
        assert_eq!(config.temperature, Some(0.7));
    }

    #[test]
    fn test_from_env_missing() {
        let result = RemoteLlmConfig::from_env(
            "GARDEN_AI_TEST_KEY_THAT_DOES_NOT_EXIST",
            "https://example.com",
            "gemini-flash-latest",
        );

        assert!(matches!(result, Err(LlmError::ApiKeyNotFound(_))));
    }
}
