//! HTTP API Server
//!
//! Axum-based HTTP server for the seoscope JSON API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use seoscope_scanner::Fetcher;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::handlers::AppState;
use super::routes::create_router;

/// HTTP API server
pub struct HttpServer {
    addr: SocketAddr,
    fetcher: Fetcher,
}

impl HttpServer {
    pub fn new(addr: SocketAddr, fetcher: Fetcher) -> Self {
        Self { addr, fetcher }
    }

    /// Run until ctrl-c
    pub async fn run(self) -> Result<()> {
        let app = create_router(AppState::new(self.fetcher));

        let listener = TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind HTTP server to {}", self.addr))?;

        info!("HTTP API server listening on http://{}", self.addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("HTTP server shutting down"),
        Err(e) => {
            warn!("Unable to listen for ctrl-c, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
