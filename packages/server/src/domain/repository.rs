//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatMessage, ConnectionId, NewChatMessage, RepositoryError, RoomName};

/// Append-only chat history
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Store a message, assigning `id = current length + 1`
    async fn append(&self, draft: NewChatMessage) -> Result<ChatMessage, RepositoryError>;

    /// Every stored message in insertion order
    async fn list(&self) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// Number of stored messages
    async fn count(&self) -> usize;
}

/// Room membership: room name to the set of connections subscribed to it
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Add a connection to a room. Joining twice is a no-op.
    async fn join(&self, room: &RoomName, connection_id: &ConnectionId)
    -> Result<(), RepositoryError>;

    /// Remove a connection from a room. Leaving a room never joined is a no-op.
    async fn leave(
        &self,
        room: &RoomName,
        connection_id: &ConnectionId,
    ) -> Result<(), RepositoryError>;

    /// Remove a connection from every room, returning the rooms it was in
    async fn leave_all(&self, connection_id: &ConnectionId)
    -> Result<Vec<RoomName>, RepositoryError>;

    /// Connections currently in a room
    async fn members(&self, room: &RoomName) -> Vec<ConnectionId>;
}
