//! System prompt construction.
//!
//! The watering decision policy lives entirely in this rendered prompt text:
//! the model is instructed when to water, which sensors to ignore, how to
//! pick a duration, and the exact JSON shape of the one available tool. The
//! adapter does not independently enforce any of these rules, so the prompt
//! is the contract.

use chrono::NaiveDate;

use crate::api::models::ChatRequest;

/// Render the system prompt for one chat request.
///
/// Deterministic for a given request and date: the device uid, the date, the
/// garden context (pretty-printed in the camelCase wire convention) and the
/// weather context are embedded verbatim.
pub fn render_system_prompt(request: &ChatRequest, today: NaiveDate) -> String {
    let device_uid = request.device_uid();
    let garden_json =
        serde_json::to_string_pretty(&request.garden_context).unwrap_or_default();
    let weather = &request.weather_context;

    format!(
        r#"Bạn là 'Synthia', một quản gia AI chuyên nghiệp quản lý vườn.
Bạn đang nói chuyện với người dùng tên là 'Chủ vườn'.
Thiết bị vườn của họ có mã là '{device_uid}'.
Hôm nay là {date}.

## BỐI CẢNH (CONTEXT) HIỆN TẠI CỦA KHU VƯỜN:
Đây là dữ liệu thời gian thực từ các cảm biến:
{garden_json}

## BỐI CẢNH (CONTEXT) THỜI TIẾT:
- Hiện tại: {description}, {temperature}°C, độ ẩm {humidity}%
- Dự báo 3 giờ tới: {next_description}, {next_temperature}°C
- Sắp có mưa: {rain_expected} (lượng mưa dự kiến: {rain_amount}mm)

## NHIỆM VỤ CỦA BẠN:
1. Trả lời thân thiện, lịch sự.
2. Nếu người dùng chỉ hỏi thông tin (ví dụ: "vườn sao rồi?", "nhiệt độ?"),
   HÃY SỬ DỤNG DỮ LIỆU TRONG 'BỐI CẢNH' để trả lời.
   KHÔNG gọi hàm `getDeviceState` nếu đã có bối cảnh.
3. Nếu người dùng ra lệnh (ví dụ: "tưới cây 5 phút"),
   HÃY SỬ DỤNG CÁC CÔNG CỤ (tools) đã cho.
4. (QUAN TRỌNG) Nếu đất khô (soil_moisture < 40) NHƯNG dự báo thời tiết cho biết
   SẮP CÓ MƯA (rain_expected = true), HÃY TỪ CHỐI TƯỚI và giải thích lý do.
5. Chỉ tưới nước khi: soil_moisture < 40 VÀ rain_expected = false

IMPORTANT: IGNORE the "light" sensor value completely. Do NOT consider light levels
when making watering decisions. Only focus on:
- soil_moisture (độ ẩm đất) - MOST IMPORTANT
- temperature (nhiệt độ)
- air_humidity (độ ẩm không khí)
- weather forecast (dự báo thời tiết)

CRITICAL: You have ONLY ONE tool available: "controlDevice"

When you want to control the pump (water the garden), you MUST use EXACTLY this format:

{{"response_type":"TOOL_CALL","tool_name":"controlDevice","arguments":{{"deviceUid":"{device_uid}","deviceName":"PUMP","turnOn":true,"durationMinutes":5}}}}

To turn OFF the pump:
{{"response_type":"TOOL_CALL","tool_name":"controlDevice","arguments":{{"deviceUid":"{device_uid}","deviceName":"PUMP","turnOn":false}}}}

IMPORTANT: When turning ON the pump (turnOn=true), you MUST include "durationMinutes" parameter.
- Decide the watering duration (in minutes) based on:
  * Current soil moisture level (lower moisture = longer duration)
  * Weather forecast (if rain expected, shorter duration or skip watering)
  * Temperature and humidity (hot dry weather = longer duration)
- Recommended duration range: 3-15 minutes
- Example calculation:
  * soil_moisture < 20%: 10-15 minutes
  * soil_moisture 20-30%: 7-10 minutes
  * soil_moisture 30-40%: 5-7 minutes
  * soil_moisture > 40%: skip watering or 3-5 minutes if very hot

DO NOT use tool names like: startWatering, controlPumpDuration, or any other name.
ONLY use "controlDevice" with deviceName="PUMP", turnOn=true/false, and durationMinutes (when turnOn=true).

If you only want to reply with plain text, return normal text (no JSON)
or return a JSON object {{"response_type":"TEXT","text":"..."}}."#,
        device_uid = device_uid,
        date = today.format("%Y-%m-%d"),
        garden_json = garden_json,
        description = weather.description.as_deref().unwrap_or("không rõ"),
        temperature = weather.temperature,
        humidity = weather.humidity,
        next_description = weather.next_description.as_deref().unwrap_or("không rõ"),
        next_temperature = weather.next_temperature,
        rain_expected = if weather.rain_expected { "CÓ" } else { "KHÔNG" },
        rain_amount = weather.rain_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> ChatRequest {
        serde_json::from_value(json!({
            "user_message": "tưới cây 5 phút",
            "device_uid": "ESP32_GARDEN_001",
            "garden_context": {"sensors": {"soil_moisture": 25.0, "temperature": 31.0}},
            "weather_context": {"rain_expected": true, "rain_amount": 2.5, "humidity": 80}
        }))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
    }

    #[test]
    fn test_prompt_embeds_device_and_date() {
        let prompt = render_system_prompt(&sample_request(), today());

        assert!(prompt.contains("'ESP32_GARDEN_001'"));
        assert!(prompt.contains("2026-05-20"));
    }

    #[test]
    fn test_prompt_embeds_garden_context_in_wire_convention() {
        let prompt = render_system_prompt(&sample_request(), today());

        assert!(prompt.contains("\"soilMoisture\": 25.0"));
        assert!(prompt.contains("\"temperature\": 31.0"));
    }

    #[test]
    fn test_prompt_states_watering_policy() {
        let prompt = render_system_prompt(&sample_request(), today());

        assert!(prompt.contains("soil_moisture < 40 VÀ rain_expected = false"));
        assert!(prompt.contains("IGNORE the \"light\" sensor"));
        assert!(prompt.contains("soil_moisture < 20%: 10-15 minutes"));
        assert!(prompt.contains("ONLY ONE tool available: \"controlDevice\""));
    }

    #[test]
    fn test_prompt_tool_schema_uses_request_device_uid() {
        let prompt = render_system_prompt(&sample_request(), today());

        assert!(prompt.contains(
            r#"{"response_type":"TOOL_CALL","tool_name":"controlDevice","arguments":{"deviceUid":"ESP32_GARDEN_001","deviceName":"PUMP","turnOn":true,"durationMinutes":5}}"#
        ));
    }

    #[test]
    fn test_prompt_reflects_rain_forecast() {
        let prompt = render_system_prompt(&sample_request(), today());
        assert!(prompt.contains("Sắp có mưa: CÓ"));
        assert!(prompt.contains("2.5mm"));

        let mut request = sample_request();
        request.weather_context.rain_expected = false;
        let prompt = render_system_prompt(&request, today());
        assert!(prompt.contains("Sắp có mưa: KHÔNG"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = render_system_prompt(&sample_request(), today());
        let b = render_system_prompt(&sample_request(), today());
        assert_eq!(a, b);
    }
}
