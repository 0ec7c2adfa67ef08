//! Data Transfer Objects (DTOs) for the demo service.
//!
//! DTOs are organized by protocol:
//! - `http`: REST request and response bodies
//! - `sse`: payloads of the SSE streams
//! - `websocket`: chat channel frames

pub mod conversion;
pub mod http;
pub mod sse;
pub mod websocket;
