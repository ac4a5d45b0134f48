//! Request validation utilities.

use crate::api::error::{ApiError, ApiResult};

/// Validate that a required field is present and non-empty.
pub fn validate_required(value: Option<&str>, field_name: &str) -> ApiResult<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        Some(_) => Err(ApiError::ValidationError(format!(
            "{} cannot be empty",
            field_name
        ))),
        None => Err(ApiError::ValidationError(format!(
            "{} is required",
            field_name
        ))),
    }
}
