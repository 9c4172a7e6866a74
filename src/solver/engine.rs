//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Code, Difficulty, Score};
use crate::game::Turn;

/// Hit and Blow solver
///
/// Tracks the full code space for one difficulty and narrows it with the
/// feedback from earlier turns.
pub struct Solver<S: Strategy> {
    strategy: S,
    difficulty: Difficulty,
    all_codes: Vec<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver for `difficulty`
    #[must_use]
    pub fn new(strategy: S, difficulty: Difficulty) -> Self {
        Self {
            strategy,
            difficulty,
            all_codes: Code::enumerate(difficulty.code_length()),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Opening guess: the ascending code `0,1,..`
    ///
    /// With no feedback yet every code partitions the space identically, so
    /// there is nothing to search.
    #[must_use]
    pub fn first_guess(&self) -> Option<&Code> {
        self.all_codes.first()
    }

    /// Get the next guess given previous turns
    ///
    /// Returns `None` if no code is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[Turn]) -> Option<&Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ => self.strategy.select_guess(&candidates),
        }
    }

    /// Codes that would have produced every observed score
    fn filter_candidates(&self, history: &[Turn]) -> Vec<&Code> {
        self.all_codes
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|turn| Score::calculate(&turn.guess, candidate).hits == turn.score.hits)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Turn]) -> usize {
        self.filter_candidates(history).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FirstStrategy, MinimaxStrategy};

    fn turn(guess: &str, secret: &str) -> Turn {
        let guess: Code = guess.parse().unwrap();
        let secret: Code = secret.parse().unwrap();
        let score = Score::calculate(&guess, &secret);
        Turn { guess, score }
    }

    #[test]
    fn first_guess_is_ascending() {
        let solver = Solver::new(FirstStrategy, Difficulty::Hard);
        assert_eq!(solver.first_guess().unwrap().to_string(), "0,1,2,3");
        assert_eq!(solver.next_guess(&[]).unwrap().to_string(), "0,1,2,3");
    }

    #[test]
    fn all_codes_are_candidates_initially() {
        let solver = Solver::new(FirstStrategy, Difficulty::Normal);
        assert_eq!(solver.count_candidates(&[]), 720);
    }

    #[test]
    fn candidates_match_history() {
        let solver = Solver::new(FirstStrategy, Difficulty::Normal);
        let history = vec![turn("0,1,2", "5,1,7"), turn("3,4,7", "5,1,7")];

        let candidates = solver.filter_candidates(&history);
        assert!(candidates.iter().any(|c| c.to_string() == "5,1,7"));
        for candidate in &candidates {
            for t in &history {
                assert_eq!(Score::calculate(&t.guess, candidate), t.score);
            }
        }
    }

    #[test]
    fn perfect_score_leaves_one_candidate() {
        let solver = Solver::new(FirstStrategy, Difficulty::Normal);
        let history = vec![turn("4,2,9", "4,2,9")];
        assert_eq!(solver.count_candidates(&history), 1);
        assert_eq!(solver.next_guess(&history).unwrap().to_string(), "4,2,9");
    }

    #[test]
    fn contradictory_history_gives_none() {
        let solver = Solver::new(MinimaxStrategy, Difficulty::Normal);
        let guess: Code = "0,1,2".parse().unwrap();
        let history = vec![
            Turn {
                guess: guess.clone(),
                score: Score { hits: 3, blows: 0 },
            },
            Turn {
                guess,
                score: Score { hits: 0, blows: 3 },
            },
        ];
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn next_guess_is_consistent() {
        let solver = Solver::new(MinimaxStrategy, Difficulty::Normal);
        let history = vec![turn("0,1,2", "9,1,4")];

        let next = solver.next_guess(&history).unwrap();
        assert_eq!(Score::calculate(&history[0].guess, next), history[0].score);
    }
}
