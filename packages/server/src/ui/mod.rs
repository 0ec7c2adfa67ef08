//! HTTP / SSE / WebSocket surface of the demo service.

pub mod error;
mod handler;
pub mod router;
mod server;
mod signal;
pub mod state;

pub use server::{Server, ServerError};
