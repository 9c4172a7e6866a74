//! Secret solving command
//!
//! Lets the solver play a full game against a known secret and returns the
//! solution path.

use crate::core::{Code, Score};
use crate::game::GuessingGame;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Code,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Safety limit on turns; consistent guessing never needs this many
    pub const DEFAULT_MAX_GUESSES: usize = 64;

    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub secret: Code,
}

impl SolveResult {
    /// Tries used, matching the game's try count
    #[must_use]
    pub fn try_count(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess step in the solution
pub struct SolveStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a secret using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret length does not match the solver's difficulty
/// - The solver runs out of candidates
/// - The game rejects a guess the solver produced
pub fn solve_secret<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let expected = solver.difficulty().code_length();
    if config.secret.len() != expected {
        return Err(format!(
            "Secret {} has {} digits, {} mode needs {expected}",
            config.secret,
            config.secret.len(),
            solver.difficulty()
        ));
    }

    let mut game = GuessingGame::new();
    game.configure_with_secret(config.secret.clone())
        .map_err(|e| e.to_string())?;

    let mut steps = Vec::new();

    while steps.len() < config.max_guesses {
        let candidates_before = solver.count_candidates(game.history());

        let guess = solver
            .next_guess(game.history())
            .ok_or_else(|| "No candidates remaining".to_string())?
            .clone();

        let score = game
            .submit_guess(&guess.to_string())
            .map_err(|e| format!("Solver produced an invalid guess: {e}"))?;

        let candidates_after = solver.count_candidates(game.history());

        steps.push(SolveStep {
            guess,
            score,
            candidates_before,
            candidates_after,
        });

        if game.is_solved() {
            return Ok(SolveResult {
                success: true,
                steps,
                secret: config.secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        secret: config.secret,
    })
}
