//! Command-line client for the devprobe demo API.

pub mod api;
pub mod chat;
pub mod domain;
pub mod error;
pub mod formatter;
mod ui;
