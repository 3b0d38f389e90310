//! Message Service
//!
//! Orchestrates message operations over the storage contract: create, list
//! with the default limit policy, single lookup, and delete.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Message, MessageStore};
use crate::shared::error::AppError;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Persist already-validated content as a new message
    async fn post_message(&self, content: String) -> Result<MessageDto, MessageError>;

    /// Get recent messages, newest first
    async fn list_messages(&self, limit: Option<i64>) -> Result<Vec<MessageDto>, MessageError>;

    /// Get a single message by id
    async fn get_message(&self, id: i64) -> Result<MessageDto, MessageError>;

    /// Delete a message by id
    async fn delete_message(&self, id: i64) -> Result<(), MessageError>;
}

/// Message data transfer object
#[derive(Debug, Clone)]
pub struct MessageDto {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AppError> for MessageError {
    fn from(error: AppError) -> Self {
        MessageError::Storage(error.to_string())
    }
}

/// MessageService implementation over any store
pub struct MessageServiceImpl<S>
where
    S: MessageStore + ?Sized,
{
    store: Arc<S>,
    default_list_limit: usize,
}

impl<S> MessageServiceImpl<S>
where
    S: MessageStore + ?Sized,
{
    pub fn new(store: Arc<S>, default_list_limit: usize) -> Self {
        Self {
            store,
            default_list_limit,
        }
    }

    /// Resolve the effective list limit: unspecified or non-positive values
    /// fall back to the default.
    fn effective_limit(&self, limit: Option<i64>) -> usize {
        match limit {
            Some(limit) if limit > 0 => limit as usize,
            _ => self.default_list_limit,
        }
    }
}

#[async_trait]
impl<S> MessageService for MessageServiceImpl<S>
where
    S: MessageStore + ?Sized,
{
    async fn post_message(&self, content: String) -> Result<MessageDto, MessageError> {
        let message = self.store.create(content).await?;
        tracing::debug!(id = message.id, "Message created");
        Ok(message.into())
    }

    async fn list_messages(&self, limit: Option<i64>) -> Result<Vec<MessageDto>, MessageError> {
        let limit = self.effective_limit(limit);
        let messages = self.store.list(limit).await?;
        Ok(messages.into_iter().map(MessageDto::from).collect())
    }

    async fn get_message(&self, id: i64) -> Result<MessageDto, MessageError> {
        match self.store.get(id).await? {
            Some(message) => Ok(message.into()),
            None => Err(MessageError::NotFound),
        }
    }

    async fn delete_message(&self, id: i64) -> Result<(), MessageError> {
        if self.store.delete(id).await? {
            tracing::debug!(id, "Message deleted");
            Ok(())
        } else {
            Err(MessageError::NotFound)
        }
    }
}
