//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::MessageDto;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<MessageDto> for MessageResponse {
    fn from(dto: MessageDto) -> Self {
        Self {
            id: dto.id,
            content: dto.content,
            created_at: dto.created_at.to_rfc3339(),
        }
    }
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
