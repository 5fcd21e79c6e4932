//! Fuzzy matching algorithms.
//!
//! Matchers work on raw bytes: candidates and needles are already encoded by
//! whoever supplies them, and comparisons are byte comparisons.

pub mod subsequence;
pub(crate) mod util;

/// Column index into a candidate.
pub type IndexType = usize;
/// Fitness score of a match. Higher is better, and it can be negative.
pub type ScoreType = i64;

/// Matched candidate columns, one per needle byte.
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching a pattern against candidates
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched indices of bytes
    fn fuzzy_indices(&self, choice: &[u8], pattern: &[u8]) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &[u8], pattern: &[u8]) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }
}
