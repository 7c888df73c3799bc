//! SortedSet implementation
//!
//! HashMap member map plus a BTreeSet order index over (score, member).

use std::collections::{BTreeSet, HashMap};

/// A set of unique string members, each with a signed 64-bit score,
/// ordered by score and then by member identity.
///
/// Invariant: every member in `scores` appears exactly once in `ordered`
/// with the matching score, and vice versa. All mutating methods uphold
/// this by touching both structures together.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedSet {
    /// member → score (O(1) lookup)
    scores: HashMap<String, i64>,

    /// (score, member) order index (range/order queries)
    ordered: BTreeSet<(i64, String)>,
}

impl SortedSet {
    /// Create a new empty sorted set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current score of a member, if present
    pub fn score(&self, member: &str) -> Option<i64> {
        self.scores.get(member).copied()
    }

    /// Check whether a member is present
    pub fn contains(&self, member: &str) -> bool {
        self.scores.contains_key(member)
    }

    /// Insert a brand-new member with the given score
    ///
    /// Returns false (and leaves the set untouched) if the member already
    /// exists; callers that may hit an existing member use [`update`] or
    /// check [`score`] first.
    ///
    /// [`update`]: SortedSet::update
    /// [`score`]: SortedSet::score
    pub fn insert(&mut self, member: String, score: i64) -> bool {
        if self.scores.contains_key(&member) {
            return false;
        }
        self.ordered.insert((score, member.clone()));
        self.scores.insert(member, score);
        true
    }

    /// Update an existing member to a new score
    ///
    /// A score change relocates the member's sort position, so the old
    /// (score, member) index entry is removed before the new one goes in.
    /// Returns the previous score, or None if the member was absent
    /// (in which case nothing changes).
    pub fn update(&mut self, member: &str, new_score: i64) -> Option<i64> {
        let old_score = *self.scores.get(member)?;
        if old_score != new_score {
            self.ordered.remove(&(old_score, member.to_string()));
            self.ordered.insert((new_score, member.to_string()));
            self.scores.insert(member.to_string(), new_score);
        }
        Some(old_score)
    }

    /// Remove a member, returning its score if it was present
    pub fn remove(&mut self, member: &str) -> Option<i64> {
        let score = self.scores.remove(member)?;
        self.ordered.remove(&(score, member.to_string()));
        Some(score)
    }

    /// Number of live members
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate members in (score, member) order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.ordered.iter().map(|(score, member)| (*score, member.as_str()))
    }
}
