//! deckstore Server Binary
//!
//! Starts the HTTP server for deckstore.

use std::sync::Arc;

use clap::Parser;
use deckstore::network::Server;
use deckstore::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// deckstore Server
#[derive(Parser, Debug)]
#[command(name = "deckstore-server")]
#[command(about = "Playing-card deck service")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8089")]
    listen: String,

    /// Number of registry shards
    #[arg(short, long, default_value = "16")]
    shards: usize,

    /// Maximum number of live decks (unbounded if omitted)
    #[arg(short, long)]
    max_decks: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,deckstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("deckstore Server v{}", deckstore::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .registry_shards(args.shards)
        .max_decks(args.max_decks)
        .build();

    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
