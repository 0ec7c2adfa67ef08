//! UseCase: チャンネル接続処理

use std::sync::Arc;

use devprobe_shared::time::Clock;

use crate::domain::{ChatEvent, ConnectionId, MessagePusher, PusherChannel, Timestamp};

use super::error::ConnectError;

/// チャンネル接続のユースケース
pub struct ConnectParticipantUseCase {
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            message_pusher,
            clock,
        }
    }

    /// 接続を登録し、`connection_response` をその接続にだけ送る
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionId)` - 新しく割り当てた接続 ID
    /// * `Err(ConnectError)` - 接続応答の送信に失敗
    pub async fn execute(&self, sender: PusherChannel) -> Result<ConnectionId, ConnectError> {
        let connection_id = ConnectionId::generate();

        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let ack = ChatEvent::ConnectionResponse {
            sid: connection_id.clone(),
            timestamp: Timestamp::new(self.clock.now_iso8601()),
        };
        self.message_pusher.push_to(&connection_id, &ack).await?;

        Ok(connection_id)
    }
}
