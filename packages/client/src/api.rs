//! HTTP side of the client: one-shot REST calls and SSE consumption.

use eventsource_client::{self as es, Client};
use futures_util::StreamExt;
use serde_json::Value;

use devprobe_server::infrastructure::dto::{
    http::SendChatRequest,
    sse::{LogEntryDto, TickStreamDto},
    websocket::ChatMessageDto,
};

use crate::{domain::normalize_base_url, error::ClientError};

/// Which SSE endpoint to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Ticks,
    Logs,
}

impl StreamKind {
    pub fn path(self) -> &'static str {
        match self {
            Self::Ticks => "/api/stream",
            Self::Logs => "/api/stream/logs",
        }
    }
}

/// One decoded SSE event
#[derive(Debug, Clone, PartialEq)]
pub enum StreamItem {
    Tick(TickStreamDto),
    Log(LogEntryDto),
    /// Payload that did not match the expected shape
    Raw(String),
}

impl StreamItem {
    fn decode(kind: StreamKind, payload: String) -> Self {
        let decoded = match kind {
            StreamKind::Ticks => serde_json::from_str(&payload).map(Self::Tick),
            StreamKind::Logs => serde_json::from_str(&payload).map(Self::Log),
        };
        decoded.unwrap_or(Self::Raw(payload))
    }

    /// The event as a JSON line
    pub fn to_json(&self) -> String {
        let encoded = match self {
            Self::Tick(tick) => serde_json::to_string(tick),
            Self::Log(entry) => serde_json::to_string(entry),
            Self::Raw(payload) => return payload.clone(),
        };
        encoded.unwrap_or_default()
    }
}

/// REST / SSE client for a devprobe server
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a JSON endpoint
    pub async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        read_json(response).await
    }

    /// `POST /api/echo`
    pub async fn echo(&self, body: &Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(self.url("/api/echo"))
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /api/chat/send`
    pub async fn send_chat(
        &self,
        username: Option<String>,
        message: String,
        room: Option<String>,
    ) -> Result<ChatMessageDto, ClientError> {
        let request = SendChatRequest {
            username,
            message: Some(message),
            room,
        };
        let response = self
            .http
            .post(self.url("/api/chat/send"))
            .json(&request)
            .send()
            .await?;
        let value = read_json(response).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Consume an SSE endpoint until the server closes it.
    ///
    /// `on_item` is called once per event; returns the number of events seen.
    /// The streams are finite, so the client never reconnects.
    pub async fn stream(
        &self,
        kind: StreamKind,
        mut on_item: impl FnMut(StreamItem),
    ) -> Result<usize, ClientError> {
        let client = es::ClientBuilder::for_url(&self.url(kind.path()))
            .map_err(|e| ClientError::Sse(e.to_string()))?
            .reconnect(es::ReconnectOptions::reconnect(false).build())
            .build();

        let mut events = client.stream();
        let mut received = 0;

        while let Some(event) = events.next().await {
            match event {
                Ok(es::SSE::Event(event)) => {
                    received += 1;
                    on_item(StreamItem::decode(kind, event.data));
                }
                Ok(es::SSE::Comment(_)) => {
                    // Ignore comments (keep-alive)
                }
                Err(es::Error::Eof | es::Error::StreamClosed) => break,
                Err(e) => return Err(ClientError::Sse(e.to_string())),
            }
        }

        tracing::debug!("Stream {} closed after {} events", kind.path(), received);
        Ok(received)
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}
