//! MessagePusher trait 定義
//!
//! Abstraction over "deliver this event to these connections". The WebSocket
//! implementation lives in the infrastructure layer.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ChatEvent, ConnectionId, MessagePushError};

/// Outbound channel of one connection (already-encoded text frames)
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Delivers chat events to connected clients.
///
/// Delivery is best effort: broadcasts skip connections whose channel is gone
/// instead of failing the whole call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register the outbound channel of a new connection
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Forget a connection
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Send an event to one connection
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError>;

    /// Send an event to the given connections
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError>;

    /// Send an event to every registered connection
    async fn broadcast_all(&self, event: &ChatEvent) -> Result<(), MessagePushError>;
}
