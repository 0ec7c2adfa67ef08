//! Entities owned by the state store.

use std::sync::atomic::{AtomicU64, Ordering};

use super::value_object::{RoomName, Timestamp, Username};

/// A chat message that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    pub username: Username,
    pub message: String,
    pub room: RoomName,
    pub timestamp: Timestamp,
}

impl NewChatMessage {
    /// Build a draft, applying the defaults for missing fields
    pub fn with_defaults(
        username: Option<String>,
        message: Option<String>,
        room: Option<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            username: Username::or_default(username),
            message: message.unwrap_or_default(),
            room: RoomName::or_default(room),
            timestamp,
        }
    }
}

/// A chat message stored in the history
///
/// `id` is `history length + 1` at the moment of the append, so the first
/// message is 1. Messages are never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub username: Username,
    pub message: String,
    pub room: RoomName,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn from_draft(id: u64, draft: NewChatMessage) -> Self {
        Self {
            id,
            username: draft.username,
            message: draft.message,
            room: draft.room,
            timestamp: draft.timestamp,
        }
    }
}

/// Number of `/api/info` requests served since startup
#[derive(Debug, Default)]
pub struct VisitCounter {
    count: AtomicU64,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one visit and return the new total
    pub fn record(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

/// Host facts reported by `/api/info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    pub platform: String,
    pub runtime_version: String,
}

/// Snapshot returned by the info endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub host: HostInfo,
    pub visit_count: u64,
    pub environment: String,
    pub timestamp: Timestamp,
}

/// Snapshot returned by the status endpoint
///
/// Uptime and memory are not measured; they are reported as "N/A".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub requests_processed: u64,
}
