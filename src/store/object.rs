//! Stored object definitions
//!
//! Type-tagged values with optional expiry.

use std::time::{Duration, Instant};

use crate::types::SortedSet;

/// Type tag of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Str,
    SortedSet,
}

/// A value stored under a key
#[derive(Debug, Clone)]
pub enum Value {
    /// Plain string value
    Str(String),

    /// Sorted set of scored members
    SortedSet(SortedSet),
}

impl Value {
    /// Get the type tag for this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::Str,
            Value::SortedSet(_) => ValueType::SortedSet,
        }
    }
}

/// A stored object: a typed value plus optional absolute expiry
#[derive(Debug, Clone)]
pub struct Object {
    /// The typed value
    pub value: Value,

    /// Absolute expiry instant; None means the object never expires
    expires_at: Option<Instant>,
}

impl Object {
    /// Create an object with a TTL in milliseconds; `ttl_ms <= 0` means no expiry
    pub fn new(value: Value, ttl_ms: i64) -> Self {
        let expires_at = if ttl_ms > 0 {
            Some(Instant::now() + Duration::from_millis(ttl_ms as u64))
        } else {
            None
        };
        Self { value, expires_at }
    }

    /// Create a non-expiring string object
    pub fn str(value: impl Into<String>) -> Self {
        Self::new(Value::Str(value.into()), -1)
    }

    /// Create a non-expiring sorted-set object
    pub fn sorted_set(set: SortedSet) -> Self {
        Self::new(Value::SortedSet(set), -1)
    }

    /// Check whether this object has expired
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }

    /// Get the type tag of the stored value
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}
