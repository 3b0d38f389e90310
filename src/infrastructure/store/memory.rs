//! In-Memory Message Store
//!
//! Ordered in-process implementation of the `MessageStore` contract with a
//! bounded retention policy. A single mutex guards the history and the id
//! counter, so every operation is one atomic step and concurrent creates can
//! never duplicate ids or corrupt ordering.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::{Message, MessageStore};
use crate::shared::error::AppError;

/// In-memory message store.
///
/// History lives in a deque with the newest message at the front, which keeps
/// the sequence ordered by `created_at` descending (ties by `id` descending,
/// since ids are assigned in insertion order). Eviction truncates from the
/// back.
pub struct InMemoryMessageStore {
    inner: Mutex<StoreInner>,
    max_history: usize,
}

struct StoreInner {
    messages: VecDeque<Message>,
    next_id: i64,
}

impl InMemoryMessageStore {
    /// Creates a store retaining at most `max_history` messages.
    pub fn new(max_history: usize) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                messages: VecDeque::new(),
                next_id: 1,
            }),
            max_history: max_history.max(1),
        }
    }

    /// The configured retention bound.
    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create(&self, content: String) -> Result<Message, AppError> {
        let mut inner = self.inner.lock();

        let message = Message {
            id: inner.next_id,
            content,
            created_at: Utc::now(),
        };
        inner.next_id += 1;

        inner.messages.push_front(message.clone());
        // Evict the oldest records once the retention bound is exceeded.
        // Ids of evicted messages are never reused.
        let max_history = self.max_history;
        if inner.messages.len() > max_history {
            inner.messages.truncate(max_history);
            tracing::debug!(
                id = message.id,
                max_history,
                "Retention bound reached, evicted oldest message"
            );
        }

        Ok(message)
    }

    async fn list(&self, limit: usize) -> Result<Vec<Message>, AppError> {
        let inner = self.inner.lock();
        Ok(inner.messages.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Message>, AppError> {
        let inner = self.inner.lock();
        Ok(inner.messages.iter().find(|m| m.id == id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.lock();
        match inner.messages.iter().position(|m| m.id == id) {
            Some(index) => Ok(inner.messages.remove(index).is_some()),
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.lock().messages.len())
    }
}
