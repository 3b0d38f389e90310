//! Validation Utilities
//!
//! Message content validation and conversion of `validator` errors
//! into the field-level error shape the API returns.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use super::error::{AppError, FieldError};

/// Name of the request body field holding the message text.
const MESSAGE_FIELD: &str = "message";

/// Validate the `message` field of an incoming payload.
///
/// Accepts only a present JSON string whose trimmed length is between 1 and
/// `max_length` characters inclusive. Returns the trimmed content on success.
///
/// Pure function: no side effects, no I/O.
pub fn validate_message(field: Option<&Value>, max_length: usize) -> Result<String, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let content = match field {
        None | Some(Value::Null) => {
            errors.add(
                MESSAGE_FIELD.into(),
                ValidationError::new("missing").with_message("message is required".into()),
            );
            None
        }
        Some(Value::String(s)) => Some(s.trim()),
        Some(_) => {
            errors.add(
                MESSAGE_FIELD.into(),
                ValidationError::new("invalid_type").with_message("message must be a string".into()),
            );
            None
        }
    };

    if let Some(content) = content {
        if content.is_empty() {
            errors.add(
                MESSAGE_FIELD.into(),
                ValidationError::new("too_short").with_message("message must not be empty".into()),
            );
        } else if content.chars().count() > max_length {
            errors.add(
                MESSAGE_FIELD.into(),
                ValidationError::new("too_long").with_message(Cow::Owned(format!(
                    "message must be at most {} characters",
                    max_length
                ))),
            );
        } else {
            return Ok(content.to_string());
        }
    }

    Err(errors)
}

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    AppError::Validation(field_errors)
}
