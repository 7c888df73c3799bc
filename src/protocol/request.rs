//! Request definitions
//!
//! A request is an ordered sequence of string tokens: the command name
//! followed by its arguments.

use crate::error::{RankError, Result};

/// A tokenized client request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Command name plus arguments, in order
    pub tokens: Vec<String>,
}

impl Request {
    /// Build a request from tokens; at least the command name is required
    pub fn new(tokens: Vec<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(RankError::Protocol("empty request".to_string()));
        }
        Ok(Self { tokens })
    }

    /// Build a request from string slices (convenience for tests and the CLI)
    pub fn from_tokens(tokens: &[&str]) -> Result<Self> {
        Self::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    /// The command name (first token)
    pub fn command(&self) -> &str {
        &self.tokens[0]
    }

    /// The arguments following the command name
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}
