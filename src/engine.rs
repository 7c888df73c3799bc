//! Engine Module
//!
//! The coordinator that executes one request end to end.
//!
//! ## Responsibilities
//! - Hold the command registry (built once at startup)
//! - Route each request to the shard owning its key
//! - Serialize execution per shard via the shard lock
//!
//! ## Concurrency Model: Single-Writer-Per-Shard
//!
//! - A key is deterministically routed to exactly one shard, so all
//!   mutations of one value are serialized by construction.
//! - A command locks exactly one shard for its whole execution and never
//!   spans shards; commands on different shards run concurrently.
//! - Command evaluation is synchronous and in-memory: no I/O, no suspension,
//!   no internal locking below the shard lock.

use crate::cmd::CommandRegistry;
use crate::config::Config;
use crate::error::{RankError, Result};
use crate::protocol::{Reply, Request};
use crate::shard::ShardManager;

/// The main command execution engine
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Independent store shards
    shards: ShardManager,

    /// Name → handler map, built once
    registry: CommandRegistry,
}

impl Engine {
    /// Create an engine with the given config
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let shards = ShardManager::new(config.shard_count);
        let registry = CommandRegistry::new();

        tracing::debug!(
            shards = shards.shard_count(),
            commands = registry.len(),
            "engine initialized"
        );

        Ok(Self {
            config,
            shards,
            registry,
        })
    }

    /// Execute one request
    ///
    /// Looks up the handler, routes to the owning shard, and evaluates the
    /// command under that shard's lock. Keyless commands run on shard 0.
    pub fn execute(&self, request: &Request) -> Result<Reply> {
        let name = request.command();
        let meta = self
            .registry
            .lookup(name)
            .ok_or_else(|| RankError::UnknownCommand(name.to_string()))?;

        let args = request.args();
        let shard = if meta.keyless {
            self.shards.shard_at(0)
        } else {
            let key = args
                .first()
                .ok_or_else(|| RankError::wrong_argument_count(meta.name))?;
            self.shards.shard_for_key(key)
        };

        tracing::trace!(command = meta.name, "executing");

        let mut store = shard.lock();
        (meta.eval)(args, &mut store)
    }

    /// Execute a command given as string tokens (convenience for tests)
    pub fn execute_tokens(&self, tokens: &[&str]) -> Result<Reply> {
        let request = Request::from_tokens(tokens)?;
        self.execute(&request)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.shard_count()
    }

    /// Index of the shard owning a key
    pub fn shard_index_for_key(&self, key: &str) -> usize {
        self.shards.shard_index_for_key(key)
    }

    /// The command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
