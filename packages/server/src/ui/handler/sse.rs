//! Server-Sent Events endpoints.
//!
//! Each request gets its own generator. Axum drops the stream when the client
//! disconnects, which cancels the generator at its next sleep.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{
        IntoResponse,
        sse::{Event, Sse},
    },
};
use futures_util::StreamExt;

use crate::{
    infrastructure::dto::sse::{LogEntryDto, TickStreamDto},
    ui::state::AppState,
};

/// Disable proxy buffering so events reach the client as they are produced
const NO_PROXY_BUFFERING: (&str, &str) = ("x-accel-buffering", "no");

/// `GET /api/stream`
pub async fn stream_ticks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events = state
        .stream_ticks_usecase
        .execute()
        .map(|event| Event::default().json_data(TickStreamDto::from(event)));

    ([NO_PROXY_BUFFERING], Sse::new(events))
}

/// `GET /api/stream/logs`
pub async fn stream_logs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events = state
        .stream_logs_usecase
        .execute()
        .map(|entry| Event::default().json_data(LogEntryDto::from(entry)));

    ([NO_PROXY_BUFFERING], Sse::new(events))
}
