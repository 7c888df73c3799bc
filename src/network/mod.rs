//! Network Module
//!
//! TCP server and per-connection handling.
//!
//! ## Responsibilities
//! - Accept client connections up to the configured cap
//! - One blocking handler thread per connection
//! - Frame requests/replies through the protocol codec

mod connection;
mod server;

pub use connection::Connection;
pub use server::Server;
