//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    ChatEvent, ChatMessage, LogEntry, NewChatMessage, ServiceInfo, ServiceStatus, TickEvent,
    Timestamp,
};
use crate::infrastructure::dto::{
    http::{InfoResponse, NOT_AVAILABLE, SendChatRequest, StatusResponse},
    sse::{LogEntryDto, StreamCompleteDto, TickDto, TickStreamDto},
    websocket::{
        ChatMessageDto, ConnectionResponseDto, MembershipNoticeDto, SendMessagePayload,
        ServerFrame,
    },
};

// ========================================
// DTO → Domain Entity
// ========================================

impl SendChatRequest {
    pub fn into_draft(self, timestamp: Timestamp) -> NewChatMessage {
        NewChatMessage::with_defaults(self.username, self.message, self.room, timestamp)
    }
}

impl SendMessagePayload {
    pub fn into_draft(self, timestamp: Timestamp) -> NewChatMessage {
        NewChatMessage::with_defaults(self.username, self.message, self.room, timestamp)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<ChatMessage> for ChatMessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id,
            username: model.username.into_string(),
            message: model.message,
            room: model.room.into_string(),
            timestamp: model.timestamp.into_string(),
        }
    }
}

impl From<&ChatEvent> for ServerFrame {
    fn from(event: &ChatEvent) -> Self {
        match event.clone() {
            ChatEvent::ConnectionResponse { sid, timestamp } => {
                Self::ConnectionResponse(ConnectionResponseDto {
                    status: "connected".to_string(),
                    sid: sid.into_string(),
                    timestamp: timestamp.into_string(),
                })
            }
            ChatEvent::UserJoined {
                username,
                room,
                timestamp,
            } => Self::UserJoined(MembershipNoticeDto {
                username: username.into_string(),
                room: room.into_string(),
                timestamp: timestamp.into_string(),
            }),
            ChatEvent::UserLeft {
                username,
                room,
                timestamp,
            } => Self::UserLeft(MembershipNoticeDto {
                username: username.into_string(),
                room: room.into_string(),
                timestamp: timestamp.into_string(),
            }),
            ChatEvent::NewMessage(message) => Self::NewMessage(message.into()),
        }
    }
}

impl From<TickEvent> for TickStreamDto {
    fn from(event: TickEvent) -> Self {
        match event {
            TickEvent::Tick {
                count,
                message,
                timestamp,
                hostname,
            } => Self::Tick(TickDto {
                count,
                message,
                timestamp: timestamp.into_string(),
                hostname,
            }),
            TickEvent::Complete { count } => Self::Complete(StreamCompleteDto {
                message: "Stream complete".to_string(),
                count,
            }),
        }
    }
}

impl From<LogEntry> for LogEntryDto {
    fn from(entry: LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.into_string(),
            level: entry.level.as_str().to_string(),
            message: entry.message.to_string(),
            service: entry.service,
            index: entry.index,
        }
    }
}

impl From<ServiceInfo> for InfoResponse {
    fn from(info: ServiceInfo) -> Self {
        Self {
            message: "DevOps Test Application",
            hostname: info.host.hostname,
            platform: info.host.platform,
            runtime_version: info.host.runtime_version,
            visit_count: info.visit_count,
            environment: info.environment,
            timestamp: info.timestamp.into_string(),
        }
    }
}

impl From<ServiceStatus> for StatusResponse {
    fn from(status: ServiceStatus) -> Self {
        Self {
            status: "running",
            uptime: NOT_AVAILABLE,
            requests_processed: status.requests_processed,
            memory_usage: NOT_AVAILABLE,
        }
    }
}
