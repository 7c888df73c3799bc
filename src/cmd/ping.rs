//! PING command
//!
//! Health check; echoes an optional message.

use crate::error::{RankError, Result};
use crate::protocol::Reply;
use crate::store::Store;

use super::CommandMeta;

pub(super) fn meta() -> CommandMeta {
    CommandMeta {
        name: "PING",
        syntax: "PING [message]",
        help_short: "Ping the server",
        keyless: true,
        eval: eval_ping,
    }
}

fn eval_ping(args: &[String], _store: &mut Store) -> Result<Reply> {
    match args {
        [] => Ok(Reply::Simple("PONG".to_string())),
        [message] => Ok(Reply::Simple(message.clone())),
        _ => Err(RankError::wrong_argument_count("PING")),
    }
}
