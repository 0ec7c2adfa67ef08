//! UseCase: チャット履歴取得

use std::sync::Arc;

use crate::domain::{ChatHistoryRepository, ChatMessage, RepositoryError};

/// チャット履歴取得のユースケース
pub struct GetChatHistoryUseCase {
    history_repository: Arc<dyn ChatHistoryRepository>,
}

impl GetChatHistoryUseCase {
    pub fn new(history_repository: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { history_repository }
    }

    /// 全履歴を追加順で返す（フィルタ・ページングなし）
    pub async fn execute(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        self.history_repository.list().await
    }
}
