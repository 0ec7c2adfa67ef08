//! UseCase: ルーム参加処理

use std::sync::Arc;

use devprobe_shared::time::Clock;

use crate::domain::{
    ChatEvent, ConnectionId, MessagePusher, RoomName, RoomRepository, Timestamp, Username,
};

use super::error::MembershipError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl JoinRoomUseCase {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            room_repository,
            message_pusher,
            clock,
        }
    }

    /// 接続をルームに追加し、参加者本人を含むルーム全員に `user_joined` を送る
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        username: Username,
        room: RoomName,
    ) -> Result<ChatEvent, MembershipError> {
        self.room_repository.join(&room, connection_id).await?;

        let targets = self.room_repository.members(&room).await;
        let event = ChatEvent::UserJoined {
            username,
            room,
            timestamp: Timestamp::new(self.clock.now_iso8601()),
        };
        self.message_pusher.broadcast(targets, &event).await?;

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::message_pusher::MockMessagePusher,
        infrastructure::repository::InMemoryRoomRepository,
    };
    use devprobe_shared::time::SystemClock;

    #[tokio::test]
    async fn test_join_broadcasts_to_room_including_joiner() {
        // テスト項目: 参加者本人を含むルームの全員に user_joined がブロードキャストされる
        // given (前提条件):
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let general = RoomName::new("general");
        rooms.join(&general, &ConnectionId::new("bob")).await.unwrap();
        rooms
            .join(&RoomName::new("ops"), &ConnectionId::new("carol"))
            .await
            .unwrap();

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|targets, event| {
                targets == &vec![ConnectionId::new("alice"), ConnectionId::new("bob")]
                    && event.name() == "user_joined"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let usecase = JoinRoomUseCase::new(rooms.clone(), Arc::new(pusher), Arc::new(SystemClock));

        // when (操作):
        let event = usecase
            .execute(&ConnectionId::new("alice"), Username::new("alice"), general.clone())
            .await
            .unwrap();

        // then (期待する結果):
        assert!(matches!(
            event,
            ChatEvent::UserJoined { ref username, ref room, .. }
                if username.as_str() == "alice" && room == &general
        ));
        assert_eq!(rooms.members(&general).await.len(), 2);
    }
}
