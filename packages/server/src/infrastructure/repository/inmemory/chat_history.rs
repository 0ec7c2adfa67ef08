//! InMemory ChatHistory Repository 実装
//!
//! ## 技術的負債
//!
//! History grows without bound: nothing is ever evicted, so a long-running
//! process keeps every message it has seen.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatHistoryRepository, ChatMessage, NewChatMessage, RepositoryError};

/// インメモリ ChatHistory Repository 実装
#[derive(Default)]
pub struct InMemoryChatHistoryRepository {
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryChatHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistoryRepository {
    async fn append(&self, draft: NewChatMessage) -> Result<ChatMessage, RepositoryError> {
        // id assignment and push happen under the same lock
        let mut messages = self.messages.lock().await;
        let id = messages.len() as u64 + 1;
        let message = ChatMessage::from_draft(id, draft);
        messages.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }

    async fn count(&self) -> usize {
        self.messages.lock().await.len()
    }
}
