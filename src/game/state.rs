//! Game state machine
//!
//! `AwaitingDifficulty` → `AwaitingGuess` on configure, `AwaitingGuess` →
//! `Solved` on a perfect score. `Solved` is terminal.

use super::GameError;
use crate::core::{Code, Difficulty, Score};
use rand::Rng;
use tracing::{debug, info};

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingDifficulty,
    AwaitingGuess,
    Solved,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// A single Hit and Blow game
#[derive(Debug, Clone)]
pub struct GuessingGame {
    phase: Phase,
    difficulty: Option<Difficulty>,
    secret: Option<Code>,
    history: Vec<Turn>,
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessingGame {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::AwaitingDifficulty,
            difficulty: None,
            secret: None,
            history: Vec::new(),
        }
    }

    /// Fix the difficulty and draw a secret from `rng`
    ///
    /// # Errors
    /// Returns `GameError::AlreadyConfigured` if called more than once.
    pub fn configure<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.ensure_unconfigured()?;
        self.install(difficulty, Code::random(difficulty, rng));
        Ok(())
    }

    /// Fix a known secret; its length selects the difficulty
    ///
    /// # Errors
    /// Returns `GameError::AlreadyConfigured` if called more than once, or
    /// `GameError::UnsupportedSecretLength` if no difficulty has that length.
    pub fn configure_with_secret(&mut self, secret: Code) -> Result<(), GameError> {
        self.ensure_unconfigured()?;
        let difficulty = Difficulty::from_code_length(secret.len())
            .ok_or(GameError::UnsupportedSecretLength(secret.len()))?;
        self.install(difficulty, secret);
        Ok(())
    }

    fn ensure_unconfigured(&self) -> Result<(), GameError> {
        if self.phase == Phase::AwaitingDifficulty {
            Ok(())
        } else {
            Err(GameError::AlreadyConfigured)
        }
    }

    fn install(&mut self, difficulty: Difficulty, secret: Code) {
        debug!(%difficulty, length = secret.len(), "game configured");
        self.difficulty = Some(difficulty);
        self.secret = Some(secret);
        self.phase = Phase::AwaitingGuess;
    }

    /// Validate and score one line of player input
    ///
    /// Invalid input leaves the game untouched, including the try count.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessFormat` for input the player should
    /// re-enter, `GameError::NotConfigured` before `configure`, and
    /// `GameError::AlreadySolved` after the winning guess.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Score, GameError> {
        let secret = match self.phase {
            Phase::AwaitingDifficulty => return Err(GameError::NotConfigured),
            Phase::Solved => return Err(GameError::AlreadySolved),
            Phase::AwaitingGuess => self.secret.as_ref().ok_or(GameError::NotConfigured)?,
        };

        let guess = Code::parse(raw, secret.len()).inspect_err(|err| {
            debug!(input = raw, %err, "guess rejected");
        })?;

        let score = Score::calculate(&guess, secret);
        self.history.push(Turn { guess, score });
        debug!(
            try_count = self.history.len(),
            hits = score.hits,
            blows = score.blows,
            "guess scored"
        );

        if score.is_perfect() {
            self.phase = Phase::Solved;
            info!(try_count = self.history.len(), "secret found");
        }

        Ok(score)
    }

    /// True once a guess has scored all hits
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Final message with the number of tries
    #[must_use]
    pub fn report(&self) -> String {
        format!("Correct!\nTries: {}", self.try_count())
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Number of accepted guesses, including the winning one
    #[inline]
    #[must_use]
    pub fn try_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn last_score(&self) -> Option<Score> {
        self.history.last().map(|turn| turn.score)
    }
}
