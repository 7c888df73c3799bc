//! ZSCORE command
//!
//! Returns the score of a member in the sorted set at key, or Nil when the
//! key or member does not exist.

use crate::error::{RankError, Result};
use crate::protocol::Reply;
use crate::store::{Store, Value};

use super::CommandMeta;

pub(super) fn meta() -> CommandMeta {
    CommandMeta {
        name: "ZSCORE",
        syntax: "ZSCORE key member",
        help_short: "Get the score of a member in the sorted set at key",
        keyless: false,
        eval: eval_zscore,
    }
}

fn eval_zscore(args: &[String], store: &mut Store) -> Result<Reply> {
    if args.len() != 2 {
        return Err(RankError::wrong_argument_count("ZSCORE"));
    }

    match store.get(&args[0]) {
        None => Ok(Reply::Nil),
        Some(obj) => match &obj.value {
            Value::SortedSet(set) => Ok(match set.score(&args[1]) {
                Some(score) => Reply::Score(score),
                None => Reply::Nil,
            }),
            _ => Err(RankError::WrongType),
        },
    }
}
