//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - `ChatEvent` を `{event, data}` フレームにエンコードして送信
//!
//! WebSocket の受付と sender の生成は UI 層（`ui/handler/websocket.rs`）で行い、
//! この実装は受け取った sender を送信にだけ使います。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ChatEvent, ConnectionId, MessagePushError, MessagePusher, PusherChannel},
    infrastructure::dto::websocket::ServerFrame,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## フィールド
///
/// - `clients`: 接続中のコネクションと対応する sender のマップ
#[derive(Default)]
pub struct WebSocketMessagePusher {
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }

    fn encode(event: &ChatEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerFrame::from(event))
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }

    fn send_best_effort(connection_id: &ConnectionId, sender: &PusherChannel, frame: &str) {
        // ブロードキャストでは一部の送信失敗を許容
        if let Err(e) = sender.send(frame.to_string()) {
            tracing::warn!("Failed to push message to connection '{}': {}", connection_id, e);
        } else {
            tracing::debug!("Broadcasted message to connection '{}'", connection_id);
        }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", connection_id);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed {} to connection '{}'", event.name(), connection_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(&target) {
                Some(sender) => Self::send_best_effort(&target, sender, &frame),
                None => tracing::warn!(
                    "Connection '{}' not found during broadcast, skipping",
                    target
                ),
            }
        }

        Ok(())
    }

    async fn broadcast_all(&self, event: &ChatEvent) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for (connection_id, sender) in clients.iter() {
            Self::send_best_effort(connection_id, sender, &frame);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoomName, Timestamp, Username};
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - push_to: 特定の接続への送信
    // - broadcast: 指定した接続への送信（一部失敗を許容）
    // - broadcast_all: 登録済みの全接続への送信
    // ========================================

    fn joined_event() -> ChatEvent {
        ChatEvent::UserJoined {
            username: Username::new("alice"),
            room: RoomName::new("general"),
            timestamp: Timestamp::new("2023-01-01T00:00:00.000000+09:00"),
        }
    }

    #[tokio::test]
    async fn test_push_to_success() {
        // テスト項目: 特定の接続にエンコード済みフレームが届く
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let alice = ConnectionId::new("alice");
        pusher.register_client(alice.clone(), tx).await;

        // when (操作):
        let result = pusher.push_to(&alice, &joined_event()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let frame: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(frame["event"], "user_joined");
        assert_eq!(frame["data"]["username"], "alice");
    }

    #[tokio::test]
    async fn test_push_to_client_not_found() {
        // テスト項目: 存在しない接続への送信はエラーを返す
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();

        // when (操作):
        let result = pusher
            .push_to(&ConnectionId::new("nobody"), &joined_event())
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(MessagePushError::ClientNotFound(_))));
    }

    #[tokio::test]
    async fn test_broadcast_partial_failure() {
        // テスト項目: 一部の接続が存在しない・閉じていてもブロードキャストは成功する
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        let alice = ConnectionId::new("alice");
        let bob = ConnectionId::new("bob");
        pusher.register_client(alice.clone(), tx1).await;
        pusher.register_client(bob.clone(), tx2).await;
        drop(rx2);

        // when (操作):
        let targets = vec![alice, bob, ConnectionId::new("nobody")];
        let result = pusher.broadcast(targets, &joined_event()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(rx1.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_broadcast_all_reaches_every_connection() {
        // テスト項目: broadcast_all で登録済みの全接続に届く
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::new("a"), tx1).await;
        pusher.register_client(ConnectionId::new("b"), tx2).await;

        // when (操作):
        let result = pusher.broadcast_all(&joined_event()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let first = rx1.recv().await;
        assert!(first.is_some());
        assert_eq!(first, rx2.recv().await);
    }

    #[tokio::test]
    async fn test_unregister_removes_connection() {
        // テスト項目: 登録解除した接続には送信されない
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let alice = ConnectionId::new("alice");
        pusher.register_client(alice.clone(), tx).await;

        // when (操作):
        pusher.unregister_client(&alice).await;

        // then (期待する結果):
        assert!(pusher.push_to(&alice, &joined_event()).await.is_err());
    }
}
