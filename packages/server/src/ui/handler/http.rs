//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
};

use crate::{
    domain::Timestamp,
    infrastructure::dto::{
        http::{
            ChatHistoryResponse, EchoResponse, HEALTH_VERSION, HealthResponse, InfoResponse,
            RootResponse, SERVICE_NAME, SendChatRequest, StatusResponse,
        },
        websocket::ChatMessageDto,
    },
    ui::{
        error::{ApiError, JsonBody},
        state::AppState,
    },
    usecase::BroadcastScope,
};

/// API description
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::describe())
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: state.clock.now_iso8601(),
        service: SERVICE_NAME,
        version: HEALTH_VERSION,
    })
}

/// Host information; every call counts one visit
pub async fn get_info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let info = state.service_info_usecase.record_visit();
    tracing::debug!("Visit #{}", info.visit_count);
    Json(info.into())
}

/// Echo the JSON body back with a timestamp
pub async fn echo(
    State(state): State<Arc<AppState>>,
    JsonBody(received): JsonBody<serde_json::Value>,
) -> Json<EchoResponse> {
    tracing::info!("Echo request received: {}", received);
    Json(EchoResponse {
        received,
        timestamp: state.clock.now_iso8601(),
    })
}

/// Service status; uptime and memory are placeholders
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(state.service_info_usecase.status().into())
}

/// Full chat history, unfiltered
pub async fn get_chat_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChatHistoryResponse>, ApiError> {
    let messages = state.get_chat_history_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(ChatHistoryResponse {
        messages: messages.into_iter().map(ChatMessageDto::from).collect(),
    }))
}

/// Store a chat message and broadcast it to every chat connection
pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<SendChatRequest>,
) -> Result<(StatusCode, Json<ChatMessageDto>), ApiError> {
    let draft = request.into_draft(Timestamp::new(state.clock.now_iso8601()));
    let message = state
        .send_message_usecase
        .execute(draft, BroadcastScope::Namespace)
        .await?;

    tracing::info!(
        "Message {} sent over HTTP by '{}'",
        message.id,
        message.username
    );

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
