//! Domain-level error types.

use thiserror::Error;

/// Errors raised by the chat history and room stores
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not complete the operation.
    ///
    /// The in-memory stores never fail; this is for non-memory backends.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while pushing events to connected clients
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    /// No connection is registered under the given id
    #[error("connection '{0}' not found")]
    ClientNotFound(String),

    /// The connection is registered but its channel is closed
    #[error("failed to push message: {0}")]
    PushFailed(String),

    /// The event could not be encoded for the wire
    #[error("failed to encode event: {0}")]
    Encode(String),
}
