//! Store Module
//!
//! The per-shard keyspace: key → typed object.
//!
//! ## Responsibilities
//! - Map keys to type-tagged values (string or sorted set)
//! - Optional TTL per object, expired objects read as absent
//! - Narrow facade for command handlers: get / get_mut / put / delete
//!
//! A store is exclusively owned by one shard; all access is serialized by
//! the shard's lock, so the store itself carries no concurrency control.

mod object;
mod keyspace;

pub use object::{Object, Value, ValueType};
pub use keyspace::Store;
