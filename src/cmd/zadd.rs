//! ZADD command
//!
//! Adds the specified members with the specified scores to the sorted set
//! stored at a key, with conditional update modifiers.
//!
//! ## Modifiers
//! - NX: only add new members, never update existing ones
//! - XX: only update existing members, never add new ones
//! - GT: only update when the new score is greater than the current score
//! - LT: only update when the new score is less than the current score
//! - CH: reply with added + changed instead of added only
//! - INCR: treat the score as an increment; single pair only, replies with
//!   the resulting score (or Nil when the pair was skipped)
//!
//! ## Example session
//! ```text
//! localhost:7379> ZADD users 10 u1
//! OK 1
//! localhost:7379> ZADD users 5 u2
//! OK 1
//! localhost:7379> ZADD users 15 u3
//! OK 1
//! localhost:7379> ZADD users 12 u4
//! OK 1
//! localhost:7379> ZADD users 10 u1
//! OK 0
//! localhost:7379> ZADD users CH 11 u1
//! OK 1
//! ```

use std::collections::HashMap;

use crate::error::{RankError, Result};
use crate::protocol::Reply;
use crate::store::{Object, Store, Value};
use crate::types::SortedSet;

use super::CommandMeta;

pub(super) fn meta() -> CommandMeta {
    CommandMeta {
        name: "ZADD",
        syntax: "ZADD key [NX | XX] [GT | LT] [CH] [INCR] score member [score member ...]",
        help_short: "Add members with scores to the sorted set at key",
        keyless: false,
        eval: eval_zadd,
    }
}

// =============================================================================
// Modifier Parsing
// =============================================================================

/// Which ZADD modifiers were requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZaddFlags {
    pub nx: bool,
    pub xx: bool,
    pub gt: bool,
    pub lt: bool,
    pub ch: bool,
    pub incr: bool,
}

impl ZaddFlags {
    /// Split leading modifier tokens from the trailing score/member pairs
    ///
    /// Modifier keywords are case-insensitive; the first token that is not a
    /// recognized modifier starts the pair list, so a member may itself be
    /// named "nx".
    pub fn parse(tokens: &[String]) -> Result<(ZaddFlags, &[String])> {
        let mut flags = ZaddFlags::default();
        let mut consumed = 0;

        for token in tokens {
            match token.to_ascii_uppercase().as_str() {
                "NX" => flags.nx = true,
                "XX" => flags.xx = true,
                "GT" => flags.gt = true,
                "LT" => flags.lt = true,
                "CH" => flags.ch = true,
                "INCR" => flags.incr = true,
                _ => break,
            }
            consumed += 1;
        }

        flags.validate()?;
        Ok((flags, &tokens[consumed..]))
    }

    /// Reject mutually exclusive modifier combinations
    fn validate(&self) -> Result<()> {
        if self.nx && self.xx {
            return Err(RankError::InvalidModifierCombination("NX and XX"));
        }
        if (self.nx && (self.gt || self.lt)) || (self.gt && self.lt) {
            return Err(RankError::InvalidModifierCombination("GT, LT, and NX"));
        }
        Ok(())
    }
}

// =============================================================================
// Evaluation
// =============================================================================

fn eval_zadd(args: &[String], store: &mut Store) -> Result<Reply> {
    if args.len() < 3 {
        return Err(RankError::wrong_argument_count("ZADD"));
    }

    let key = &args[0];
    let (flags, rest) = ZaddFlags::parse(&args[1..])?;

    if rest.is_empty() || rest.len() % 2 != 0 {
        return Err(RankError::wrong_argument_count("ZADD"));
    }

    // Each candidate score must be a base-10 signed 64-bit integer
    let mut pairs = Vec::with_capacity(rest.len() / 2);
    for chunk in rest.chunks_exact(2) {
        let score: i64 = chunk[0].parse().map_err(|_| RankError::InvalidNumber)?;
        pairs.push((score, chunk[1].clone()));
    }

    // INCR applies to exactly one pair
    if flags.incr && pairs.len() > 1 {
        return Err(RankError::IncrMultiplePairs);
    }

    match store.get_mut(key) {
        Some(obj) => match &mut obj.value {
            Value::SortedSet(set) => apply(set, flags, &pairs),
            _ => Err(RankError::WrongType),
        },
        None => {
            // First mutation against this key creates the collection; the
            // command is fully validated by now so no error path remains
            // that would leave a key behind spuriously.
            let mut set = SortedSet::new();
            let reply = apply(&mut set, flags, &pairs)?;
            store.put(key.clone(), Object::sorted_set(set));
            Ok(reply)
        }
    }
}

// =============================================================================
// Mutation Engine
// =============================================================================

/// A structural change decided during planning
enum PlannedOp {
    Insert { member: String, score: i64 },
    Update { member: String, score: i64 },
}

/// Apply one ZADD request to a sorted set.
///
/// Two phases: plan every pair's decision against the current set plus a
/// pending overlay (so duplicate members within one request observe earlier
/// pairs), then apply the planned operations as one batch. Any error aborts
/// during planning, before the set is touched.
fn apply(set: &mut SortedSet, flags: ZaddFlags, pairs: &[(i64, String)]) -> Result<Reply> {
    let mut pending: HashMap<&str, i64> = HashMap::new();
    let mut ops: Vec<PlannedOp> = Vec::new();

    let mut added: i64 = 0;
    let mut changed: i64 = 0;

    // Outcome of the single INCR pair: the resulting score, or None when
    // the pair was skipped by NX/XX/GT/LT.
    let mut incr_outcome: Option<i64> = None;

    for (given, member) in pairs {
        let current = pending
            .get(member.as_str())
            .copied()
            .or_else(|| set.score(member));

        match current {
            None => {
                if flags.xx {
                    continue;
                }
                // INCR on an absent member treats the baseline as zero, so
                // the stored score is the increment itself.
                let stored = *given;
                pending.insert(member.as_str(), stored);
                ops.push(PlannedOp::Insert {
                    member: member.clone(),
                    score: stored,
                });
                added += 1;
                incr_outcome = Some(stored);
            }
            Some(current) => {
                if flags.nx {
                    continue;
                }
                let candidate = if flags.incr {
                    current.checked_add(*given).ok_or(RankError::InvalidNumber)?
                } else {
                    *given
                };
                if flags.gt && candidate <= current {
                    continue;
                }
                if flags.lt && candidate >= current {
                    continue;
                }
                if candidate == current {
                    // No structural change; not counted toward CH
                    incr_outcome = Some(current);
                    continue;
                }
                // A member already credited earlier in this request (as an
                // insert or an update) counts at most once toward the reply.
                let first_touch = !pending.contains_key(member.as_str());
                pending.insert(member.as_str(), candidate);
                ops.push(PlannedOp::Update {
                    member: member.clone(),
                    score: candidate,
                });
                if first_touch {
                    changed += 1;
                }
                incr_outcome = Some(candidate);
            }
        }
    }

    // Commit the batch
    for op in ops {
        match op {
            PlannedOp::Insert { member, score } => {
                set.insert(member, score);
            }
            PlannedOp::Update { member, score } => {
                set.update(&member, score);
            }
        }
    }

    if flags.incr {
        return Ok(match incr_outcome {
            Some(score) => Reply::Score(score),
            None => Reply::Nil,
        });
    }

    if flags.ch {
        Ok(Reply::Count(added + changed))
    } else {
        Ok(Reply::Count(added))
    }
}
