//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the remaining candidates, so each guess is consistent with all
//! feedback seen so far.

use super::partition::max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Minimise the worst-case number of remaining candidates (default)
    Minimax(MinimaxStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
    /// First candidate in lexicographic order
    First(FirstStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random", "first".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "first" => Self::First(FirstStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
            Self::First(_) => "first",
        }
    }
}

/// Minimax strategy
///
/// Picks the candidate whose worst-case partition is smallest. Ties go to the
/// earliest candidate, so the choice is deterministic.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        if candidates.len() <= 2 {
            // Either pick wins or leaves exactly one candidate
            return candidates.first().copied();
        }

        candidates
            .par_iter()
            .min_by_key(|&&guess| max_remaining(guess, candidates))
            .copied()
    }
}

/// Random strategy
///
/// Uniformly random candidate from the thread-local RNG.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}

/// First-candidate strategy
///
/// Always plays the lowest remaining candidate.
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Code]) -> Option<&'a Code> {
        candidates.first().copied()
    }
}
