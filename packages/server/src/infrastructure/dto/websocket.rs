//! Chat channel frames.
//!
//! Every frame is a JSON text message `{"event": <name>, "data": <object>}`,
//! in both directions.

use serde::{Deserialize, Serialize};

/// A stored chat message on the wire (history, `new_message`, HTTP send)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub id: u64,
    pub username: String,
    pub message: String,
    #[serde(default)]
    pub room: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResponseDto {
    pub status: String,
    pub sid: String,
    pub timestamp: String,
}

/// Body of `user_joined` and `user_left`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipNoticeDto {
    pub username: String,
    pub room: String,
    pub timestamp: String,
}

/// Server-to-client frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerFrame {
    ConnectionResponse(ConnectionResponseDto),
    UserJoined(MembershipNoticeDto),
    UserLeft(MembershipNoticeDto),
    NewMessage(ChatMessageDto),
}

/// Client-to-server frame before its payload is interpreted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawClientFrame {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Payload of `join` and `leave`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Payload of `send_message`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Client-to-server frame with its payload decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFrame {
    Join(MembershipPayload),
    Leave(MembershipPayload),
    SendMessage(SendMessagePayload),
}

/// Why a client frame was ignored
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown event '{0}'")]
    UnknownEvent(String),
}

impl ClientFrame {
    /// Decode a text frame. A missing or `null` payload counts as empty.
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let raw: RawClientFrame = serde_json::from_str(text)?;
        let data = if raw.data.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            raw.data
        };

        match raw.event.as_str() {
            "join" => Ok(Self::Join(serde_json::from_value(data)?)),
            "leave" => Ok(Self::Leave(serde_json::from_value(data)?)),
            "send_message" => Ok(Self::SendMessage(serde_json::from_value(data)?)),
            other => Err(FrameError::UnknownEvent(other.to_string())),
        }
    }

    /// Encode as a text frame (used by the client)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let (event, data) = match self {
            Self::Join(payload) => ("join", serde_json::to_value(payload)?),
            Self::Leave(payload) => ("leave", serde_json::to_value(payload)?),
            Self::SendMessage(payload) => ("send_message", serde_json::to_value(payload)?),
        };
        serde_json::to_string(&RawClientFrame {
            event: event.to_string(),
            data,
        })
    }
}
