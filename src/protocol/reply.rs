//! Reply definitions
//!
//! Command results are a tagged variant, never an overloaded integer slot:
//! a ZADD with INCR returns a Score, a plain ZADD returns a Count, and the
//! two are distinct on the wire.

/// Reply status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    Nil = 0x01,
    Error = 0x02,
}

/// A successful command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Number of members added (or added + changed under CH)
    Count(i64),

    /// The resulting score of an INCR request
    Score(i64),

    /// A simple string result (e.g. "OK", "PONG", a GET value)
    Simple(String),

    /// Absence: missing key/member, or a skipped INCR pair
    Nil,
}

impl Reply {
    /// Wire status for this reply
    pub fn status(&self) -> Status {
        match self {
            Reply::Nil => Status::Nil,
            _ => Status::Ok,
        }
    }
}
