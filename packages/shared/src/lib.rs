//! Utilities shared by the devprobe server and client.

pub mod logger;
pub mod time;
