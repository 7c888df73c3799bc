//! Command Module
//!
//! Command handlers and the registry that dispatches to them.
//!
//! ## Responsibilities
//! - Define per-command metadata (name, syntax, short help)
//! - Validate arguments and evaluate commands against one shard's store
//! - Build the name → handler registry once at startup
//!
//! The registry is explicit construction: `CommandRegistry::new()` builds the
//! map and the Engine holds it by value, so there is no process-wide mutable
//! registration step.

mod ping;
mod strings;
mod zadd;
mod zcard;
mod zscore;

use std::collections::HashMap;

use crate::error::Result;
use crate::protocol::Reply;
use crate::store::Store;

pub use zadd::ZaddFlags;

/// Evaluates one command against the owning shard's store
///
/// `args` excludes the command name itself; for keyed commands `args[0]`
/// is the key. The store is borrowed for the duration of this one call.
pub type EvalFn = fn(args: &[String], store: &mut Store) -> Result<Reply>;

/// Static description of one command
pub struct CommandMeta {
    /// Uppercase command name
    pub name: &'static str,

    /// Human-readable syntax line
    pub syntax: &'static str,

    /// One-line description
    pub help_short: &'static str,

    /// Keyless commands skip key routing and run on shard 0
    pub keyless: bool,

    /// The handler
    pub eval: EvalFn,
}

/// Name → handler map, built once at startup
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandMeta>,
}

impl CommandRegistry {
    /// Build the registry with all known commands
    pub fn new() -> Self {
        let mut commands = HashMap::new();
        for meta in [
            zadd::meta(),
            zscore::meta(),
            zcard::meta(),
            strings::set_meta(),
            strings::get_meta(),
            ping::meta(),
        ] {
            commands.insert(meta.name, meta);
        }
        Self { commands }
    }

    /// Look up a command by name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<&CommandMeta> {
        self.commands.get(name.to_ascii_uppercase().as_str())
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate all registered commands
    pub fn iter(&self) -> impl Iterator<Item = &CommandMeta> {
        self.commands.values()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
