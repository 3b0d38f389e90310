//! Message entity and store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A stored message.
///
/// - `id` is assigned by the store at creation, strictly increasing, and never
///   reused even after deletion.
/// - `content` is trimmed, non-empty text within the configured length bound.
///   The store treats valid content as a precondition and does not re-validate.
/// - `created_at` is assigned at creation and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Get the content length in characters.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// Storage contract for message history.
///
/// History is an ordered sequence, newest first (`created_at` descending, ties
/// broken by `id` descending). Implementations enforce a retention bound: when
/// an insert pushes the count past the bound, the oldest records are evicted.
/// Each operation behaves as a single atomic step with respect to concurrent
/// callers.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Create a new message from already-validated content, assigning its id
    /// and timestamp. Evicts the oldest records if the retention bound is
    /// exceeded.
    async fn create(&self, content: String) -> Result<Message, AppError>;

    /// Return up to `limit` most-recent messages, newest first.
    async fn list(&self, limit: usize) -> Result<Vec<Message>, AppError>;

    /// Find a message by its id.
    async fn get(&self, id: i64) -> Result<Option<Message>, AppError>;

    /// Delete a message by id. Returns `false` if no such message exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Number of messages currently retained.
    async fn count(&self) -> Result<usize, AppError>;
}
