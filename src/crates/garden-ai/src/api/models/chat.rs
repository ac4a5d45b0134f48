//! Chat API models and DTOs.
//!
//! The upstream orchestration caller and this service use different naming
//! conventions for the same logical fields, so every inbound DTO accepts both
//! camelCase and snake_case wire names. The garden/weather context structs
//! serialize in camelCase (the wire convention) because their serialized form
//! is embedded into the model prompt; the outbound [`ChatReply`] serializes
//! snake_case, which is what the caller consumes.

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::validation::validate_required;

/// Instantaneous sensor snapshot for one garden device.
///
/// All fields are optional on the wire and default to zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SensorReading {
    /// Air temperature in °C.
    pub temperature: f64,

    /// Relative air humidity in percent.
    #[serde(alias = "airHumidity")]
    pub air_humidity: f64,

    /// Ambient light level.
    pub light: f64,

    /// Soil moisture on a 0-100 scale.
    #[serde(alias = "soilMoisture")]
    pub soil_moisture: f64,
}

/// Current device/garden status as reported by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct DeviceState {
    /// Device identifier, when known.
    #[serde(alias = "deviceUid")]
    pub device_uid: Option<String>,

    /// Connectivity status (e.g. "ONLINE").
    pub status: Option<String>,

    /// Last-seen timestamp, seconds since epoch.
    #[serde(alias = "lastSeen")]
    pub last_seen: i64,

    /// Control mode (e.g. "AUTO", "MANUAL").
    #[serde(alias = "controlMode")]
    pub control_mode: Option<String>,

    /// Pump state (e.g. "ON", "OFF").
    #[serde(alias = "pumpState")]
    pub pump_state: Option<String>,

    /// Latest sensor snapshot; zeroed when the caller omits it.
    pub sensors: SensorReading,
}

/// Current weather plus short-range forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct WeatherContext {
    /// Current conditions description.
    pub description: Option<String>,

    /// Current temperature in °C.
    pub temperature: f64,

    /// Current relative humidity in percent.
    pub humidity: i64,

    /// Whether rain is expected in the forecast window.
    #[serde(alias = "rainExpected")]
    pub rain_expected: bool,

    /// Forecast conditions description.
    #[serde(alias = "nextDescription")]
    pub next_description: Option<String>,

    /// Forecast temperature in °C.
    #[serde(alias = "nextTemperature")]
    pub next_temperature: f64,

    /// Expected rain amount in mm.
    #[serde(alias = "rainAmount")]
    pub rain_amount: f64,
}

/// Inbound chat request from the orchestration caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message (required, non-empty).
    #[serde(alias = "userMessage")]
    pub user_message: Option<String>,

    /// Target device identifier (required, non-empty).
    #[serde(alias = "deviceUid")]
    pub device_uid: Option<String>,

    /// Live garden state supplied by the caller.
    #[serde(default, alias = "gardenContext")]
    pub garden_context: DeviceState,

    /// Weather context supplied by the caller.
    #[serde(default, alias = "weatherContext")]
    pub weather_context: WeatherContext,
}

impl ChatRequest {
    /// Validate required fields. Runs before any model invocation.
    pub fn validate(&self) -> ApiResult<()> {
        validate_required(self.user_message.as_deref(), "user_message")?;
        validate_required(self.device_uid.as_deref(), "device_uid")?;
        Ok(())
    }

    /// The user's message; call after `validate()`.
    pub fn user_message(&self) -> &str {
        self.user_message.as_deref().unwrap_or_default()
    }

    /// The device identifier; call after `validate()`.
    pub fn device_uid(&self) -> &str {
        self.device_uid.as_deref().unwrap_or_default()
    }
}

/// A structured device action requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Name of the tool to invoke (always "controlDevice" per the prompt
    /// contract; not validated here).
    pub tool_name: String,

    /// Tool arguments as a free-form JSON mapping.
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

/// Discriminator for the two reply shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    /// Plain text answer.
    #[serde(rename = "TEXT")]
    Text,
    /// Structured tool-invocation instruction.
    #[serde(rename = "TOOL_CALL")]
    ToolCall,
}

/// Outbound normalized reply.
///
/// Exactly one of `text_content`/`tool_call` is populated, selected by
/// `response_type`; the other serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Which of the two shapes this reply carries.
    pub response_type: ResponseType,

    /// Present iff `response_type == Text`.
    pub text_content: Option<String>,

    /// Present iff `response_type == ToolCall`.
    pub tool_call: Option<ToolInvocation>,
}

impl ChatReply {
    /// Build a plain text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Text,
            text_content: Some(content.into()),
            tool_call: None,
        }
    }

    /// Build a tool-call reply.
    pub fn tool_call(invocation: ToolInvocation) -> Self {
        Self {
            response_type: ResponseType::ToolCall,
            text_content: None,
            tool_call: Some(invocation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sensor_reading_defaults() {
        let reading: SensorReading = serde_json::from_str("{}").unwrap();
        assert_eq!(reading, SensorReading::default());
        assert_eq!(reading.soil_moisture, 0.0);
    }

    #[test]
    fn test_sensor_reading_accepts_both_conventions() {
        let camel: SensorReading =
            serde_json::from_value(json!({"soilMoisture": 25.0, "airHumidity": 60.0})).unwrap();
        let snake: SensorReading =
            serde_json::from_value(json!({"soil_moisture": 25.0, "air_humidity": 60.0})).unwrap();

        assert_eq!(camel, snake);
        assert_eq!(camel.soil_moisture, 25.0);
    }

    #[test]
    fn test_context_serializes_camel_case() {
        let state = DeviceState {
            device_uid: Some("D1".to_string()),
            sensors: SensorReading {
                soil_moisture: 25.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["deviceUid"], "D1");
        assert_eq!(value["sensors"]["soilMoisture"], 25.0);
        assert!(value.get("soil_moisture").is_none());
    }

    #[test]
    fn test_chat_request_dual_aliases() {
        let camel: ChatRequest = serde_json::from_value(json!({
            "userMessage": "tưới cây 5 phút",
            "deviceUid": "D1",
            "gardenContext": {"sensors": {"soilMoisture": 25.0}},
            "weatherContext": {"rainExpected": false}
        }))
        .unwrap();

        let snake: ChatRequest = serde_json::from_value(json!({
            "user_message": "tưới cây 5 phút",
            "device_uid": "D1",
            "garden_context": {"sensors": {"soil_moisture": 25.0}},
            "weather_context": {"rain_expected": false}
        }))
        .unwrap();

        assert!(camel.validate().is_ok());
        assert_eq!(camel.user_message(), snake.user_message());
        assert_eq!(
            camel.garden_context.sensors.soil_moisture,
            snake.garden_context.sensors.soil_moisture
        );
    }

    #[test]
    fn test_chat_request_missing_required_fields() {
        let req: ChatRequest =
            serde_json::from_value(json!({"device_uid": "D1"})).unwrap();
        assert!(req.validate().is_err());

        let req: ChatRequest =
            serde_json::from_value(json!({"user_message": "hello"})).unwrap();
        assert!(req.validate().is_err());

        let req: ChatRequest =
            serde_json::from_value(json!({"user_message": "", "device_uid": "D1"})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_chat_request_contexts_default_when_absent() {
        let req: ChatRequest =
            serde_json::from_value(json!({"user_message": "hi", "device_uid": "D1"})).unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.garden_context, DeviceState::default());
        assert!(!req.weather_context.rain_expected);
    }

    #[test]
    fn test_chat_reply_serialization() {
        let reply = ChatReply::text("hello");
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(value["response_type"], "TEXT");
        assert_eq!(value["text_content"], "hello");
        assert_eq!(value["tool_call"], serde_json::Value::Null);
    }

    #[test]
    fn test_tool_call_reply_serialization() {
        let mut arguments = serde_json::Map::new();
        arguments.insert("deviceUid".to_string(), json!("D1"));
        arguments.insert("turnOn".to_string(), json!(true));
        arguments.insert("durationMinutes".to_string(), json!(8));

        let reply = ChatReply::tool_call(ToolInvocation {
            tool_name: "controlDevice".to_string(),
            arguments,
        });

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["response_type"], "TOOL_CALL");
        assert_eq!(value["text_content"], serde_json::Value::Null);
        assert_eq!(value["tool_call"]["tool_name"], "controlDevice");
        assert_eq!(value["tool_call"]["arguments"]["durationMinutes"], 8);
    }
}
