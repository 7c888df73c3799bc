//! ZCARD command
//!
//! Returns the number of members in the sorted set at key; 0 for a missing
//! key.

use crate::error::{RankError, Result};
use crate::protocol::Reply;
use crate::store::{Store, Value};

use super::CommandMeta;

pub(super) fn meta() -> CommandMeta {
    CommandMeta {
        name: "ZCARD",
        syntax: "ZCARD key",
        help_short: "Get the number of members in the sorted set at key",
        keyless: false,
        eval: eval_zcard,
    }
}

fn eval_zcard(args: &[String], store: &mut Store) -> Result<Reply> {
    if args.len() != 1 {
        return Err(RankError::wrong_argument_count("ZCARD"));
    }

    match store.get(&args[0]) {
        None => Ok(Reply::Count(0)),
        Some(obj) => match &obj.value {
            Value::SortedSet(set) => Ok(Reply::Count(set.len() as i64)),
            _ => Err(RankError::WrongType),
        },
    }
}
