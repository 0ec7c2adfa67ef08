//! Vocabulary of the two SSE generators.

use std::time::Duration;

use super::value_object::Timestamp;

/// Levels the simulated log stream picks from
pub const LOG_LEVELS: [LogLevel; 4] = [
    LogLevel::Info,
    LogLevel::Debug,
    LogLevel::Warn,
    LogLevel::Error,
];

/// Canned messages the simulated log stream picks from
pub const LOG_MESSAGES: [&str; 8] = [
    "Application started",
    "Database connection established",
    "Processing request",
    "Cache updated",
    "Request completed",
    "High memory usage detected",
    "Cleanup task started",
    "Configuration reloaded",
];

/// Pacing and length of the SSE generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Number of numbered tick events before the completion event
    pub tick_count: u32,
    /// Delay after each tick event
    pub tick_interval: Duration,
    /// Number of log events
    pub log_count: u32,
    /// Delay after each log event
    pub log_interval: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_interval: Duration::from_secs(1),
            log_count: 20,
            log_interval: Duration::from_millis(500),
        }
    }
}

impl StreamSettings {
    /// Same counts as the defaults with no delay, for tests
    pub fn immediate() -> Self {
        Self {
            tick_interval: Duration::ZERO,
            log_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// One item of the tick stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    Tick {
        count: u32,
        message: String,
        timestamp: Timestamp,
        hostname: String,
    },
    /// Final event, carries the number of ticks sent
    Complete { count: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// One simulated log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub level: LogLevel,
    pub message: &'static str,
    pub service: String,
    /// 1-based position in the stream
    pub index: u32,
}
