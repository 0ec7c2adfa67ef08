//! UseCase: チャンネル切断処理
//!
//! Disconnect is log-only from the client's point of view: nothing is
//! broadcast. The connection is dropped from every room and from the pusher.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RepositoryError, RoomName, RoomRepository};

/// チャンネル切断のユースケース
pub struct DisconnectParticipantUseCase {
    room_repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            room_repository,
            message_pusher,
        }
    }

    /// 切断を実行し、退出したルームの一覧を返す
    ///
    /// The pusher registration is removed even when the room cleanup fails.
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Vec<RoomName>, RepositoryError> {
        let left = self.room_repository.leave_all(connection_id).await;
        self.message_pusher.unregister_client(connection_id).await;
        left
    }
}
