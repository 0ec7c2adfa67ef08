//! UseCase error types.

use thiserror::Error;

use crate::domain::{MessagePushError, RepositoryError};

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to acknowledge connection: {0}")]
    Acknowledge(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("failed to update room membership: {0}")]
    Repository(#[from] RepositoryError),

    #[error("failed to broadcast membership change: {0}")]
    Broadcast(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum SendMessageError {
    #[error("failed to store message: {0}")]
    Repository(#[from] RepositoryError),

    #[error("failed to broadcast message: {0}")]
    Broadcast(#[from] MessagePushError),
}
