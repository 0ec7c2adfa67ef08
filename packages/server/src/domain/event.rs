//! Events the server emits on the chat channel.

use super::{
    entity::ChatMessage,
    value_object::{ConnectionId, RoomName, Timestamp, Username},
};

/// Server-to-client chat events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Sent once to a connection right after it is accepted
    ConnectionResponse {
        sid: ConnectionId,
        timestamp: Timestamp,
    },
    /// Broadcast to a room after someone joins it
    UserJoined {
        username: Username,
        room: RoomName,
        timestamp: Timestamp,
    },
    /// Broadcast to a room after someone leaves it
    UserLeft {
        username: Username,
        room: RoomName,
        timestamp: Timestamp,
    },
    /// A chat message that was just stored
    NewMessage(ChatMessage),
}

impl ChatEvent {
    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectionResponse { .. } => "connection_response",
            Self::UserJoined { .. } => "user_joined",
            Self::UserLeft { .. } => "user_left",
            Self::NewMessage(_) => "new_message",
        }
    }
}
