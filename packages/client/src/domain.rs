//! Domain logic for client-side operations.
//!
//! Pure functions with no I/O, kept apart from the session code so they can be
//! tested directly.

use crate::error::ClientError;

/// Path of the chat channel on the server
pub const CHAT_PATH: &str = "/chat";

/// Typed at the chat prompt to leave the room and exit
pub const LEAVE_COMMAND: &str = "/leave";

/// What a line typed at the chat prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Send(String),
    Leave,
    Ignore,
}

/// Interpret one line of chat input
pub fn parse_input(line: &str) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        InputAction::Ignore
    } else if line == LEAVE_COMMAND {
        InputAction::Leave
    } else {
        InputAction::Send(line.to_string())
    }
}

/// Trim trailing slashes so paths can be appended with `format!`
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Turn the HTTP base URL into the WebSocket URL of the chat channel.
///
/// `http://host:5000` becomes `ws://host:5000/chat`, `https` becomes `wss`.
pub fn chat_url(base_url: &str) -> Result<String, ClientError> {
    let base = normalize_base_url(base_url);
    let rest = if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if base.starts_with("ws://") || base.starts_with("wss://") {
        base
    } else {
        return Err(ClientError::InvalidUrl(base_url.to_string()));
    };

    if rest.ends_with(CHAT_PATH) {
        Ok(rest)
    } else {
        Ok(format!("{rest}{CHAT_PATH}"))
    }
}

/// Check if the client should exit immediately based on the error type.
///
/// Errors that a reconnect cannot fix (a bad URL) end the client at once.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::InvalidUrl(_))
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}
