//! Demo API server for infrastructure testing.
//!
//! REST endpoints (health, info, echo, status, chat history/send), two SSE
//! generators and a room-based WebSocket chat channel.

pub mod config;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
