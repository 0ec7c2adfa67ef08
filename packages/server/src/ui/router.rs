//! Axum router construction.
//!
//! CORS allows any origin, method and header. That is a convenience for a
//! disposable test service and should be narrowed for anything longer-lived.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{
    handler::{http, sse, websocket},
    state::AppState,
};

/// Build the complete router.
///
/// - `GET /` -- API description
/// - `GET /health` -- health check
/// - `GET /api/info` -- host info, counts a visit
/// - `POST /api/echo` -- echo a JSON body
/// - `GET /api/status` -- service status
/// - `GET /api/stream` -- SSE tick stream
/// - `GET /api/stream/logs` -- SSE log stream
/// - `GET /api/chat/messages` -- chat history
/// - `POST /api/chat/send` -- send a chat message over HTTP
/// - `GET /chat` -- WebSocket chat channel
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(http::root))
        .route("/health", get(http::health_check))
        .route("/api/info", get(http::get_info))
        .route("/api/echo", post(http::echo))
        .route("/api/status", get(http::get_status))
        .route("/api/stream", get(sse::stream_ticks))
        .route("/api/stream/logs", get(sse::stream_logs))
        .route("/api/chat/messages", get(http::get_chat_messages))
        .route("/api/chat/send", post(http::send_chat_message))
        .route("/chat", get(websocket::chat_handler))
        .fallback(http::not_found)
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
