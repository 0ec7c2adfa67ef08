//! Infrastructure 層
//!
//! Concrete stores, the WebSocket pusher, wire DTOs and host introspection.

pub mod dto;
pub mod host;
pub mod message_pusher;
pub mod repository;
