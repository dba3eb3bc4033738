//! Name guards: word starts that look like a name but are not

use crate::domain::text::to_lower;

/// Guard list checked before a name match is accepted
#[derive(Debug, Clone, Default)]
pub struct GuardTable {
    /// (exact name, lower-cased continuation)
    guards: Vec<(String, Vec<char>)>,
}

impl GuardTable {
    /// Create from (name, followed_by) pairs
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self {
            guards: pairs
                .into_iter()
                .map(|(name, followed_by)| (name, followed_by.chars().map(to_lower).collect()))
                .collect(),
        }
    }

    /// True if `name` matched at `text[start..]` must be rejected.
    ///
    /// `name` is compared exactly; the continuation after the match is compared
    /// case-insensitively.
    pub fn rejects(&self, name: &str, text: &[char], start: usize, matched_len: usize) -> bool {
        self.guards.iter().any(|(guard, continuation)| {
            guard == name
                && text
                    .get(start + matched_len..start + matched_len + continuation.len())
                    .is_some_and(|tail| {
                        tail.iter()
                            .zip(continuation)
                            .all(|(&a, &b)| to_lower(a) == b)
                    })
        })
    }
}
