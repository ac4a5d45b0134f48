//! Model output normalization.
//!
//! The model replies with free-form text that may be, or may embed, a JSON
//! object describing a tool call. Parsing is a fixed sequence of attempts
//! with explicit fallthrough to "treat as plain text":
//!
//! 1. if the trimmed text starts with `{`, parse the whole trimmed text;
//! 2. otherwise look for an embedded object whose content begins with a
//!    `response_type` key and extends to the end of the string;
//! 3. anything unparseable is a plain text answer, not an error.

use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::api::models::{ChatReply, ToolInvocation};

/// Errors produced while classifying a parsed model reply.
///
/// Only a structurally broken tool call is an error; unrecognizable output
/// degrades to plain text instead.
#[derive(Debug, Error)]
pub enum ReplyParseError {
    /// A TOOL_CALL object without a usable tool name.
    #[error("tool call is missing a non-empty 'tool_name'")]
    MissingToolName,

    /// A TOOL_CALL object whose `arguments` is present but not a mapping.
    #[error("tool call 'arguments' must be a JSON object")]
    InvalidArguments,
}

/// Best-effort extraction of a JSON object from model output.
///
/// Returns `None` when no parse attempt succeeds; each attempt's failure is
/// non-fatal and silently moves on.
pub fn extract_candidate_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    // First try: the whole text is JSON.
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).ok();
    }

    // Second try: a JSON object embedded in surrounding prose, starting at a
    // `response_type` key and running to the end of the string.
    let re = Regex::new(r#"(?s)(\{["']response_type["'].*?\})\s*$"#).ok()?;
    let captured = re.captures(text)?.get(1)?.as_str();

    debug!("extracted embedded JSON from model response");
    serde_json::from_str(captured).ok()
}

/// Normalize raw model output into a [`ChatReply`].
///
/// - a `TOOL_CALL` object becomes a tool-call reply;
/// - a `TEXT` object contributes its `text` field (default empty);
/// - everything else is returned verbatim as a text reply.
pub fn normalize_reply(text: &str) -> Result<ChatReply, ReplyParseError> {
    let parsed = extract_candidate_json(text);

    if let Some(Value::Object(obj)) = &parsed {
        match obj.get("response_type").and_then(Value::as_str) {
            Some("TOOL_CALL") => {
                let tool_name = obj
                    .get("tool_name")
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())
                    .ok_or(ReplyParseError::MissingToolName)?;

                // Absent arguments default to an empty map; a present value
                // of any other shape is a broken tool call.
                let arguments = match obj.get("arguments") {
                    None => serde_json::Map::new(),
                    Some(Value::Object(map)) => map.clone(),
                    Some(_) => return Err(ReplyParseError::InvalidArguments),
                };

                return Ok(ChatReply::tool_call(ToolInvocation {
                    tool_name: tool_name.to_string(),
                    arguments,
                }));
            }
            Some("TEXT") => {
                let content = obj
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                return Ok(ChatReply::text(content));
            }
            _ => {}
        }
    }

    Ok(ChatReply::text(text))
}
