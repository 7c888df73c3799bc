//! TCP Server
//!
//! Accepts connections and dispatches each to its own handler thread.

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use crate::network::Connection;

/// How long the accept loop sleeps when no connection is pending
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP server for RankDB
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
    shutdown: Arc<AtomicBool>,
    active_connections: Arc<AtomicUsize>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self {
            config,
            engine,
            shutdown: Arc::new(AtomicBool::new(false)),
            active_connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle used to signal shutdown from another thread (e.g. Ctrl+C)
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Number of currently active connections
    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::Relaxed)
    }

    /// Start the server (blocking)
    ///
    /// Accepts connections until the shutdown flag is set. The listener is
    /// non-blocking so the loop can observe the flag between accepts.
    pub fn run(&mut self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr)?;
        listener.set_nonblocking(true)?;

        tracing::info!("Listening on {}", self.config.listen_addr);

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!("Shutdown flag set, stopping accept loop");
                break;
            }

            let (stream, addr) = match listener.accept() {
                Ok(conn) => conn,
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            // Enforce the connection cap before spawning
            let active = self.active_connections.load(Ordering::Relaxed);
            if active >= self.config.max_connections {
                tracing::warn!(
                    "Rejecting connection from {}: {} active connections (max {})",
                    addr,
                    active,
                    self.config.max_connections
                );
                drop(stream);
                continue;
            }

            // Handler threads use blocking I/O with timeouts
            if let Err(e) = stream.set_nonblocking(false) {
                tracing::warn!("Failed to configure stream for {}: {}", addr, e);
                continue;
            }

            let engine = Arc::clone(&self.engine);
            let counter = Arc::clone(&self.active_connections);
            let read_timeout_ms = self.config.read_timeout_ms;
            let write_timeout_ms = self.config.write_timeout_ms;

            counter.fetch_add(1, Ordering::Relaxed);
            thread::spawn(move || {
                let result = Connection::new(stream, engine).and_then(|mut conn| {
                    conn.set_timeouts(read_timeout_ms, write_timeout_ms)?;
                    conn.handle()
                });
                if let Err(e) = result {
                    tracing::warn!("Connection from {} ended with error: {}", addr, e);
                }
                counter.fetch_sub(1, Ordering::Relaxed);
            });
        }

        Ok(())
    }
}
