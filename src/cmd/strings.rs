//! SET and GET commands
//!
//! Plain string values. SET overwrites any existing object regardless of
//! type; GET fails with a wrong-type error on a sorted-set key.

use crate::error::{RankError, Result};
use crate::protocol::Reply;
use crate::store::{Object, Store, Value};

use super::CommandMeta;

pub(super) fn set_meta() -> CommandMeta {
    CommandMeta {
        name: "SET",
        syntax: "SET key value",
        help_short: "Store a string value at key",
        keyless: false,
        eval: eval_set,
    }
}

pub(super) fn get_meta() -> CommandMeta {
    CommandMeta {
        name: "GET",
        syntax: "GET key",
        help_short: "Get the string value at key",
        keyless: false,
        eval: eval_get,
    }
}

fn eval_set(args: &[String], store: &mut Store) -> Result<Reply> {
    if args.len() != 2 {
        return Err(RankError::wrong_argument_count("SET"));
    }

    store.put(args[0].clone(), Object::str(args[1].clone()));
    Ok(Reply::Simple("OK".to_string()))
}

fn eval_get(args: &[String], store: &mut Store) -> Result<Reply> {
    if args.len() != 1 {
        return Err(RankError::wrong_argument_count("GET"));
    }

    match store.get(&args[0]) {
        None => Ok(Reply::Nil),
        Some(obj) => match &obj.value {
            Value::Str(value) => Ok(Reply::Simple(value.clone())),
            _ => Err(RankError::WrongType),
        },
    }
}
