//! Error types for the devprobe client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URL cannot be turned into an endpoint address
    #[error("Invalid server URL '{0}'")]
    InvalidUrl(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The SSE stream could not be opened or broke off
    #[error("SSE error: {0}")]
    Sse(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
