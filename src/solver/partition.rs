//! Partitioning candidates by the feedback a guess would produce
//!
//! Because every non-hit position is a blow, two candidates land in the same
//! partition exactly when they share the same number of hits.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Group candidates by the score they would produce against `guess`
#[must_use]
pub fn group_by_score(guess: &Code, candidates: &[&Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Worst-case number of candidates left after playing `guess`
///
/// # Examples
/// ```
/// use hit_and_blow::core::Code;
/// use hit_and_blow::solver::partition::max_remaining;
///
/// let candidates = [
///     Code::parse("0,1,2", 3).unwrap(),
///     Code::parse("0,1,3", 3).unwrap(),
///     Code::parse("4,5,6", 3).unwrap(),
/// ];
/// let refs: Vec<&Code> = candidates.iter().collect();
///
/// // 0,1,2 scores 3 hits against itself, 2 hits against 0,1,3, and
/// // 0 hits against 4,5,6: every partition holds one candidate
/// assert_eq!(max_remaining(&candidates[0], &refs), 1);
/// ```
#[must_use]
pub fn max_remaining(guess: &Code, candidates: &[&Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_score(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}
