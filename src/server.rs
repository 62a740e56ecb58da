// ABOUTME: HTTP server assembly for the chatbot conversation API
// ABOUTME: Merges route groups, applies middleware layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;
use crate::routes::{ConversationRoutes, HealthRoutes};

/// The chatbot HTTP server
pub struct ChatbotServer {
    resources: Arc<ServerResources>,
}

impl ChatbotServer {
    /// Create a server over already-initialized resources
    #[must_use]
    pub fn new(resources: ServerResources) -> Self {
        Self {
            resources: Arc::new(resources),
        }
    }

    /// Build the complete router with middleware applied
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .merge(ConversationRoutes::routes(Arc::clone(&self.resources)));

        with_request_tracing(routes).layer(setup_cors(&self.resources.config.cors))
    }

    /// Bind to the configured host and port and serve until Ctrl+C
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, the port cannot be bound,
    /// or the server fails while running
    pub async fn run(self) -> AppResult<()> {
        let config = &self.resources.config;
        let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
            .parse()
            .map_err(|e| AppError::config(format!("Invalid bind address: {e}")))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener until Ctrl+C
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while running
    pub async fn serve(self, listener: TcpListener) -> AppResult<()> {
        let local = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Listener has no local address: {e}")))?;
        info!("HTTP server listening on http://{local}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler the server keeps running until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
