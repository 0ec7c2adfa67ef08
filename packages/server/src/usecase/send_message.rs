//! UseCase: メッセージ送信処理
//!
//! Used by both the chat channel (`send_message`, scoped to one room) and
//! `POST /api/chat/send` (every connection of the namespace).

use std::sync::Arc;

use crate::domain::{
    ChatEvent, ChatHistoryRepository, ChatMessage, MessagePusher, NewChatMessage, RoomName,
    RoomRepository,
};

use super::error::SendMessageError;

/// Who receives the `new_message` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastScope {
    /// Members of one room
    Room(RoomName),
    /// Every connection of the chat namespace, whatever room they are in
    Namespace,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    history_repository: Arc<dyn ChatHistoryRepository>,
    room_repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    pub fn new(
        history_repository: Arc<dyn ChatHistoryRepository>,
        room_repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            history_repository,
            room_repository,
            message_pusher,
        }
    }

    /// メッセージを履歴に追加し、`scope` に従ってブロードキャストする
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 履歴に追加されたメッセージ（id 付き）
    /// * `Err(SendMessageError)` - 追加またはブロードキャストに失敗
    pub async fn execute(
        &self,
        draft: NewChatMessage,
        scope: BroadcastScope,
    ) -> Result<ChatMessage, SendMessageError> {
        let message = self.history_repository.append(draft).await?;
        let event = ChatEvent::NewMessage(message.clone());

        match scope {
            BroadcastScope::Room(room) => {
                let targets = self.room_repository.members(&room).await;
                tracing::debug!("Broadcasting message {} to room '{}'", message.id, room);
                self.message_pusher.broadcast(targets, &event).await?;
            }
            BroadcastScope::Namespace => {
                tracing::debug!("Broadcasting message {} to every connection", message.id);
                self.message_pusher.broadcast_all(&event).await?;
            }
        }

        Ok(message)
    }
}
