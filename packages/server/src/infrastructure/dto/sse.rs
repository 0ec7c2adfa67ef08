//! Payloads of the SSE streams.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDto {
    pub count: u32,
    pub message: String,
    pub timestamp: String,
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCompleteDto {
    pub message: String,
    pub count: u32,
}

/// Any item of the tick stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickStreamDto {
    Tick(TickDto),
    Complete(StreamCompleteDto),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryDto {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub service: String,
    pub index: u32,
}
