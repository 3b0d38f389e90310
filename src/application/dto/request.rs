//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

/// Post message request.
///
/// The field is kept as a raw JSON value so the validator can distinguish a
/// missing field from a present non-string one and report each as a
/// field-level error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

/// Message list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<i64>,
}
