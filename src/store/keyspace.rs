//! Store implementation
//!
//! HashMap keyspace with lazy expiry on access.

use std::collections::HashMap;

use super::Object;

/// The keyspace of one shard
#[derive(Debug, Default)]
pub struct Store {
    data: HashMap<String, Object>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an object by key
    ///
    /// An expired object reads as absent; eviction happens on the next
    /// mutable access.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.data.get(key).filter(|obj| !obj.is_expired())
    }

    /// Get a mutable object by key, evicting it first if expired
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        if self.data.get(key).is_some_and(|obj| obj.is_expired()) {
            self.data.remove(key);
            return None;
        }
        self.data.get_mut(key)
    }

    /// Store an object under a key, replacing any previous object
    pub fn put(&mut self, key: impl Into<String>, object: Object) {
        self.data.insert(key.into(), object);
    }

    /// Delete a key, returning the object if it was live
    pub fn delete(&mut self, key: &str) -> Option<Object> {
        self.data.remove(key).filter(|obj| !obj.is_expired())
    }

    /// Number of keys currently held (expired keys may still be counted
    /// until their next access)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
