//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (V1 - Simple Binary)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Marker(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! Payload: token count (4) then per token: length (4) + UTF-8 bytes.
//! The first token is the command name, e.g. `["ZADD", "users", "10", "u1"]`.
//!
//! ### Reply Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK    - Payload: kind (1) + data
//! - 0x01: NIL   - Payload: empty
//! - 0x02: ERROR - Payload: UTF-8 message
//!
//! ### OK Payload Kinds
//! - 0x01: COUNT  - i64 big-endian
//! - 0x02: SCORE  - i64 big-endian
//! - 0x03: SIMPLE - UTF-8 string

mod request;
mod reply;
mod codec;

pub use request::Request;
pub use reply::{Reply, Status};
pub use codec::{
    decode_reply, decode_request, encode_error, encode_reply, encode_request, read_reply,
    read_request, write_error, write_reply, write_request,
};
