//! Shard manager implementation
//!
//! Hash routing over a fixed set of mutex-guarded stores.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use parking_lot::{Mutex, MutexGuard};

use crate::store::Store;

/// One partition of the keyspace
pub struct Shard {
    store: Mutex<Store>,
}

impl Shard {
    fn new() -> Self {
        Self {
            store: Mutex::new(Store::new()),
        }
    }

    /// Lock this shard's store for one command's execution
    pub fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock()
    }
}

/// Owns all shards and routes keys to them
pub struct ShardManager {
    shards: Vec<Shard>,
}

impl ShardManager {
    /// Create a manager with the given number of shards (at least 1)
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let shards = (0..shard_count).map(|_| Shard::new()).collect();
        Self { shards }
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard owning a key
    ///
    /// Deterministic for the lifetime of the process, so every command on
    /// one key is serialized by the same shard lock.
    pub fn shard_index_for_key(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }

    /// The shard owning a key
    pub fn shard_for_key(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index_for_key(key)]
    }

    /// The shard at a fixed index (keyless commands use shard 0)
    pub fn shard_at(&self, index: usize) -> &Shard {
        &self.shards[index]
    }
}
