//! DevOps test API server.
//!
//! Serves REST endpoints, two SSE streams and a room-based WebSocket chat.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin devprobe-server
//! PORT=8080 DEBUG=true cargo run --bin devprobe-server
//! cargo run --bin devprobe-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use devprobe_server::{
    config::Config,
    domain::StreamSettings,
    ui::{Server, state::AppState},
};
use devprobe_shared::{logger::setup_logger, time::SystemClock};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), config.log_level());

    if config.uses_default_secret() {
        tracing::warn!("SECRET_KEY is not set; using the built-in development key");
    }

    let environment = config.resolved_environment();
    tracing::info!(
        "Starting DevOps Test Application on port {} (environment: {})",
        config.port,
        environment
    );

    let state = Arc::new(AppState::in_memory(
        environment,
        StreamSettings::default(),
        Arc::new(SystemClock),
    ));

    if let Err(e) = Server::new(state).run(&config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
