//! Error types for RankDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Unified error type for RankDB operations
#[derive(Debug, Error)]
pub enum RankError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Command Validation Errors
    // -------------------------------------------------------------------------
    #[error("wrong number of arguments for '{cmd}' command")]
    WrongArgumentCount { cmd: String },

    #[error("value is not an integer or out of range")]
    InvalidNumber,

    #[error("{0} options are mutually exclusive")]
    InvalidModifierCombination(&'static str),

    #[error("INCR option supports a single score-member pair")]
    IncrMultiplePairs,

    #[error("operation against a key holding the wrong kind of value")]
    WrongType,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    // -------------------------------------------------------------------------
    // Client-side Errors
    // -------------------------------------------------------------------------
    /// An error frame reported by the server, as seen by a client
    #[error("server error: {0}")]
    Server(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RankError {
    /// Argument-count error for the given command name.
    pub fn wrong_argument_count(cmd: &str) -> Self {
        RankError::WrongArgumentCount { cmd: cmd.to_string() }
    }
}
