//! UseCase: ルーム退出処理
//!
//! No check is made that the connection joined the room before.

use std::sync::Arc;

use devprobe_shared::time::Clock;

use crate::domain::{
    ChatEvent, ConnectionId, MessagePusher, RoomName, RoomRepository, Timestamp, Username,
};

use super::error::MembershipError;

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl LeaveRoomUseCase {
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

    /// 接続をルームから外し、残ったメンバーに `user_left` を送る
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        username: Username,
        room: RoomName,
    ) -> Result<ChatEvent, MembershipError> {
        self.room_repository.leave(&room, connection_id).await?;

        let targets = self.room_repository.members(&room).await;
        let event = ChatEvent::UserLeft {
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
    async fn test_leave_notifies_remaining_members_only() {
        // テスト項目: 退出者を除いたルームのメンバーに user_left が送られる
        // given (前提条件):
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let general = RoomName::new("general");
        rooms.join(&general, &ConnectionId::new("alice")).await.unwrap();
        rooms.join(&general, &ConnectionId::new("bob")).await.unwrap();

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|targets, event| {
                targets == &vec![ConnectionId::new("bob")] && event.name() == "user_left"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let usecase = LeaveRoomUseCase::new(rooms.clone(), Arc::new(pusher), Arc::new(SystemClock));

        // when (操作):
        let result = usecase
            .execute(&ConnectionId::new("alice"), Username::new("alice"), general.clone())
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rooms.members(&general).await, vec![ConnectionId::new("bob")]);
    }

    #[tokio::test]
    async fn test_leave_without_join_still_broadcasts() {
        // テスト項目: 参加していないルームからの退出でも user_left が送られる
        // given (前提条件):
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|targets, _| targets.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let usecase = LeaveRoomUseCase::new(rooms, Arc::new(pusher), Arc::new(SystemClock));

        // when (操作):
        let result = usecase
            .execute(&ConnectionId::new("ghost"), Username::default(), RoomName::default())
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
