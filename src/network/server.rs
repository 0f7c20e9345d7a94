//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use super::handlers;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;

/// Build the router for all deck routes
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/deck", post(handlers::create_deck))
        .route(
            "/decks/{id}",
            get(handlers::open_deck).delete(handlers::delete_deck),
        )
        .route("/decks/{id}/draw", post(handlers::draw_cards))
        .with_state(engine)
}

/// HTTP server for deckstore
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr.as_str()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router(Arc::clone(&self.engine)))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped accepting requests");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
