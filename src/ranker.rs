//! Ranking of merged matches.

use crate::dispatcher::MatchResult;

/// Number of results kept for display when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 30;

/// Sorts `results` by descending score and keeps at most `k` of them.
///
/// The sort is stable: matches with equal scores keep their relative input
/// order, so the output only depends on the order of `results`.
pub fn top_k(mut results: Vec<MatchResult>, k: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(k);
    results
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::corpus::Candidate;

    fn result(text: &str, score: i64, index: usize) -> MatchResult {
        MatchResult {
            candidate: Candidate::from(text.as_bytes()),
            score,
            index,
        }
    }

    fn texts(results: &[MatchResult]) -> Vec<String> {
        results.iter().map(|r| r.text().into_owned()).collect()
    }

    #[test]
    fn test_descending_score() {
        let ranked = top_k(vec![result("c", -3, 0), result("a", 2, 1), result("b", 0, 2)], 10);
        assert_eq!(texts(&ranked), ["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![result("z", 0, 3), result("y", 1, 0), result("x", 0, 1), result("w", 0, 2)];
        let ranked = top_k(input, 10);
        assert_eq!(texts(&ranked), ["y", "z", "x", "w"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let input: Vec<_> = (0..50).map(|i| result("a", i, i as usize)).collect();
        let ranked = top_k(input, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 30);
        assert_eq!(ranked[0].score, 49);
        assert_eq!(ranked[29].score, 20);
        assert!(top_k(vec![result("a", 1, 0)], 0).is_empty());
    }

    #[test]
    fn test_rerun_is_identical() {
        let input = vec![result("a", 1, 0), result("b", 1, 1), result("c", 2, 2)];
        assert_eq!(top_k(input.clone(), 2), top_k(input, 2));
    }
}
