//! Gap-penalized subsequence matching.
//!
//! The needle must appear in the candidate as a subsequence: every needle byte
//! is found in order, not necessarily adjacent. Among all such alignments the
//! matcher keeps the best score, where every matched byte is worth `1` and
//! every candidate byte skipped between two consecutive matches costs `1`.
//! A needle typed exactly as it appears in the candidate therefore scores
//! `len(needle)`, and scattered matches drift towards (and below) zero.
//!
//! Scores are memoized in a [`ScoreMatrix`] with one column per candidate byte
//! and one row per needle byte. Row `r` is only scanned over the window that
//! starts right after the first match of row `r - 1` and stops early enough to
//! leave one candidate byte for each of the remaining needle bytes.
//!
//! # Example:
//! ```
//! use quickopen::fuzzy_matcher::FuzzyMatcher;
//! use quickopen::fuzzy_matcher::subsequence::SubsequenceMatcher;
//!
//! let matcher = SubsequenceMatcher::default();
//!
//! assert_eq!(None, matcher.fuzzy_match(b"makefile", b"mg"));
//! assert_eq!(Some(-2), matcher.fuzzy_match(b"main.go", b"mg"));
//!
//! let (score, indices) = matcher.fuzzy_indices(b"axbycz", b"abc").unwrap();
//! assert_eq!(indices, [0, 2, 4]);
//! assert_eq!(score, 1);
//! ```

use crate::CaseMatching;
use crate::fuzzy_matcher::util::cheap_matches;
use crate::fuzzy_matcher::{FuzzyMatcher, IndexType, MatchIndices, ScoreType};
use crate::matrix::ScoreMatrix;

/// A memoized score: `None` where no alignment ends at that cell.
pub type ScoreCell = Option<ScoreType>;

/// A successful match together with the matrix it was computed in.
#[derive(Clone, Debug)]
pub struct SubsequenceMatch {
    /// Best score over the final needle row.
    pub score: ScoreType,
    /// `len(candidate)` x `len(needle)` memo table.
    pub matrix: ScoreMatrix<ScoreCell>,
}

impl SubsequenceMatch {
    /// Reconstructs the candidate columns of one best-scoring alignment.
    ///
    /// The columns are strictly increasing, one per needle byte.
    pub fn indices(&self) -> MatchIndices {
        let height = self.matrix.height();
        if height == 0 {
            return MatchIndices::new();
        }

        let Some(mut column) = self
            .matrix
            .row(height - 1)
            .iter()
            .position(|cell| *cell == Some(self.score))
        else {
            return MatchIndices::new();
        };

        let mut indices = vec![0; height];
        indices[height - 1] = column;
        let mut score = self.score;
        for row in (1..height).rev() {
            // score = 1 + best carried value of the previous row
            let carried = score - 1;
            let found = (0..column).rev().find_map(|prev| match self.matrix[(prev, row - 1)] {
                Some(s) if s - gap_penalty(prev, column) == carried => Some((prev, s)),
                _ => None,
            });
            let Some((prev, prev_score)) = found else {
                debug_assert!(false, "no predecessor for ({column}, {row})");
                break;
            };
            indices[row - 1] = prev;
            column = prev;
            score = prev_score;
        }
        indices
    }
}

#[inline]
fn gap_penalty(prev_column: IndexType, column: IndexType) -> ScoreType {
    (column - prev_column - 1) as ScoreType
}

/// Fills the score matrix of `pattern` against `choice`.
///
/// Returns `None` as soon as one needle byte cannot be placed.
fn score_matrix(choice: &[u8], pattern: &[u8], ignore_case: bool) -> Option<SubsequenceMatch> {
    let width = choice.len();
    let height = pattern.len();

    if height > width {
        return None;
    }

    let mut matrix = ScoreMatrix::new(width, height, None);
    if pattern.is_empty() {
        return Some(SubsequenceMatch { score: 0, matrix });
    }

    let byte_eq = |a: u8, b: u8| {
        if ignore_case {
            a.eq_ignore_ascii_case(&b)
        } else {
            a == b
        }
    };

    // first matching column of the previous row, `None` while on row 0
    let mut prev_match: Option<IndexType> = None;

    for (row, &needle_byte) in pattern.iter().enumerate() {
        let remainder = height - row - 1;
        let window_start = prev_match.map_or(0, |prev| prev + 1);
        let mut first_match = None;

        for column in window_start..width - remainder {
            if !byte_eq(choice[column], needle_byte) {
                continue;
            }
            first_match.get_or_insert(column);

            let mut score = 1;
            if let Some(prev) = prev_match {
                let best_previous = (prev..column)
                    .filter_map(|p| matrix[(p, row - 1)].map(|s| s - gap_penalty(p, column)))
                    .max();
                score += best_previous.unwrap_or(0);
            }
            matrix[(column, row)] = Some(score);
        }

        prev_match = Some(first_match?);
    }

    let score = matrix.row(height - 1).iter().flatten().copied().max()?;
    Some(SubsequenceMatch { score, matrix })
}

/// Renders a score matrix as a text grid, one line per needle byte.
///
/// Unscored cells are printed as `.`, bytes that are not printable ASCII as `?`.
pub fn render_matrix(matrix: &ScoreMatrix<ScoreCell>, choice: &[u8], pattern: &[u8]) -> String {
    let cells = matrix.map(|cell| cell.map_or_else(|| String::from("."), |s| s.to_string()));
    let w = cells.rows().flatten().map(String::len).max().unwrap_or(1);

    let mut lines = Vec::with_capacity(cells.height() + 1);
    let header: String = choice.iter().map(|&b| format!(" {:>w$}", printable(b))).collect();
    lines.push(format!(" {header}"));
    for (row, row_cells) in cells.rows().enumerate() {
        let body: String = row_cells.iter().map(|cell| format!(" {cell:>w$}")).collect();
        let label = pattern.get(row).map_or('?', |&b| printable(b));
        lines.push(format!("{label}{body}"));
    }
    lines.join("\n")
}

fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' }
}

//------------------------------------------------------------------------------
/// Subsequence matcher with per-gap penalties.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsequenceMatcher {
    case: CaseMatching,
}

impl SubsequenceMatcher {
    /// Creates a matcher with the given case handling.
    pub fn new(case: CaseMatching) -> Self {
        Self { case }
    }

    /// Sets the matcher to ignore ASCII case when matching.
    pub fn ignore_case(mut self) -> Self {
        self.case = CaseMatching::Ignore;
        self
    }

    /// Sets the matcher to use smart case (case-insensitive unless the pattern
    /// contains an uppercase letter).
    pub fn smart_case(mut self) -> Self {
        self.case = CaseMatching::Smart;
        self
    }

    /// Sets the matcher to compare bytes exactly.
    pub fn respect_case(mut self) -> Self {
        self.case = CaseMatching::Respect;
        self
    }

    fn is_case_sensitive(&self, pattern: &[u8]) -> bool {
        match self.case {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => pattern.iter().any(u8::is_ascii_uppercase),
        }
    }

    /// Runs the full matrix computation and keeps the matrix around.
    pub fn match_matrix(&self, choice: &[u8], pattern: &[u8]) -> Option<SubsequenceMatch> {
        score_matrix(choice, pattern, !self.is_case_sensitive(pattern))
    }
}

impl FuzzyMatcher for SubsequenceMatcher {
    fn fuzzy_indices(&self, choice: &[u8], pattern: &[u8]) -> Option<(ScoreType, MatchIndices)> {
        let m = self.match_matrix(choice, pattern)?;
        Some((m.score, m.indices()))
    }

    fn fuzzy_match(&self, choice: &[u8], pattern: &[u8]) -> Option<ScoreType> {
        let ignore_case = !self.is_case_sensitive(pattern);
        // Skip the allocation for candidates that cannot match at all
        cheap_matches(choice, pattern, ignore_case)?;
        score_matrix(choice, pattern, ignore_case).map(|m| m.score)
    }
}

/// Fuzzy match `choice` against `pattern` comparing bytes exactly, returning
/// the score and matched indices.
pub fn fuzzy_indices(choice: &[u8], pattern: &[u8]) -> Option<(ScoreType, MatchIndices)> {
    SubsequenceMatcher::default().fuzzy_indices(choice, pattern)
}

/// Fuzzy match `choice` against `pattern` comparing bytes exactly, returning
/// only the score.
pub fn fuzzy_match(choice: &[u8], pattern: &[u8]) -> Option<ScoreType> {
    SubsequenceMatcher::default().fuzzy_match(choice, pattern)
}
