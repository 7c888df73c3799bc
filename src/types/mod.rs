//! Value Types Module
//!
//! In-memory data structures stored under keys.
//!
//! ## Responsibilities
//! - Sorted-set structure: member → score map plus a (score, member) order index
//! - O(1) score lookup, O(log n) ordered insert/update/remove
//! - Ordered iteration for range-style reads
//!
//! ## Data Structure Choice
//! HashMap + BTreeSet over a composite (score, member) key:
//! - The map answers "what is this member's score" without touching the index
//! - The BTreeSet keeps members sorted by score, ties broken by member identity
//! - No manual pointer graph (skip list) needed for correctness

mod sorted_set;

pub use sorted_set::SortedSet;
