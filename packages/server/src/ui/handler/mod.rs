//! Request handlers, grouped by transport.

pub mod http;
pub mod sse;
pub mod websocket;
