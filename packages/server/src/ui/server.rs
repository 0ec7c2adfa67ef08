//! Server execution logic.

use std::sync::Arc;

use tokio::net::TcpListener;

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Errors that can occur when starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server hit a fatal I/O error while serving
    #[error("serve error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Demo API server
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(AppState::in_memory(env, StreamSettings::default(), clock));
/// Server::new(state).run("0.0.0.0", 5000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Bind to `host:port` and serve until Ctrl+C or SIGTERM
    pub async fn run(self, host: &str, port: u16) -> Result<(), ServerError> {
        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener until Ctrl+C or SIGTERM
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        let app = build_router(self.state);

        match listener.local_addr() {
            Ok(addr) => {
                tracing::info!("DevOps test API listening on http://{}", addr);
                tracing::info!("Chat channel: ws://{}/chat", addr);
            }
            Err(e) => tracing::warn!("Could not read local address: {}", e),
        }
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
