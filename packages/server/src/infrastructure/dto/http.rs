//! HTTP API request and response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::ChatMessageDto;

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "devops-test-api";

/// Version reported by `/health`
pub const HEALTH_VERSION: &str = "1.0.0";

/// Version reported by `/`
pub const API_VERSION: &str = "2.0.0";

/// Value used for status fields that are not measured
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub hostname: String,
    pub platform: String,
    pub runtime_version: String,
    pub visit_count: u64,
    pub environment: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub received: serde_json::Value,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub uptime: &'static str,
    pub requests_processed: u64,
    pub memory_usage: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessageDto>,
}

/// Body of `POST /api/chat/send`; every field is optional
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SendChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
    pub endpoints: &'static [&'static str],
}

impl RootResponse {
    pub fn describe() -> Self {
        Self {
            message: "DevOps Test API",
            version: API_VERSION,
            features: &["REST API", "SSE Streaming", "WebSocket Chat"],
            endpoints: &[
                "/health - Health check",
                "/api/info - Application information",
                "/api/echo - Echo POST data",
                "/api/status - Service status",
                "/api/stream - SSE stream test",
                "/api/stream/logs - SSE log stream",
                "/api/chat/messages - Get chat messages",
                "/api/chat/send - Send chat message (POST)",
                "ws://host/chat - WebSocket chat channel",
            ],
        }
    }
}
