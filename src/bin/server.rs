//! RankDB Server Binary
//!
//! Starts the TCP server for RankDB.

use std::sync::Arc;

use clap::Parser;
use rankdb::network::Server;
use rankdb::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// RankDB Server
#[derive(Parser, Debug)]
#[command(name = "rankdb-server")]
#[command(about = "Sharded in-memory data store with sorted-set ranking")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7379")]
    listen: String,

    /// Number of store shards
    #[arg(short, long, default_value = "8")]
    shards: usize,

    /// Maximum concurrent connections
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rankdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("RankDB Server v{}", rankdb::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Shards: {}", args.shards);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .shard_count(args.shards)
        .max_connections(args.max_connections)
        .build();

    // Create engine
    let engine = match Engine::new(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to create engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    let mut server = Server::new(config, engine);

    // Set up Ctrl+C handling: the accept loop polls this flag between
    // accepts and exits once it is set
    let shutdown = server.shutdown_handle();
    if let Err(e) = ctrlc::set_handler(move || {
        tracing::info!("Received Ctrl+C, initiating shutdown...");
        shutdown.store(true, std::sync::atomic::Ordering::Relaxed);
    }) {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    // Start server
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
