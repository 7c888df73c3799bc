//! # RankDB
//!
//! A sharded, in-memory data store with:
//! - Sorted-set value type (members ranked by score, then identity)
//! - Conditional add/update semantics (NX/XX/GT/LT/CH/INCR)
//! - Single-writer-per-shard concurrency model
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                  (Multiple Clients)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │          (Command Registry + Shard Routing)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          │            │            │
//!          ▼            ▼            ▼
//!   ┌───────────┐┌───────────┐┌───────────┐
//!   │  Shard 0  ││  Shard 1  ││  Shard N  │
//!   │  (Mutex)  ││  (Mutex)  ││  (Mutex)  │
//!   └─────┬─────┘└─────┬─────┘└─────┬─────┘
//!         │            │            │
//!         ▼            ▼            ▼
//!   ┌───────────────────────────────────┐
//!   │    Store (key → typed Object)     │
//!   │      SortedSet │ Str │ TTL        │
//!   └───────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod types;
pub mod store;
pub mod shard;
pub mod cmd;
pub mod protocol;
pub mod network;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RankError, Result};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RankDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
