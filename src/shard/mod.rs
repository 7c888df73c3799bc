//! Shard Module
//!
//! Partitions the keyspace into independent, single-writer shards.
//!
//! ## Responsibilities
//! - Deterministic key → shard routing (hash of the key)
//! - One mutex-guarded Store per shard
//! - Serialize all commands touching one key by construction
//!
//! ## Concurrency Model
//! A shard fully processes one command before the next; a command never
//! spans shards. Commands on different shards run concurrently. The store
//! and the value types need no internal locking because exclusivity comes
//! from the shard lock.

mod manager;

pub use manager::{Shard, ShardManager};
