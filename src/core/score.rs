//! Guess feedback
//!
//! A score counts hits (right digit in the right position) and blows. Every
//! position that is not a hit is a blow, whether or not the guessed digit
//! appears elsewhere in the secret, so `hits + blows` always equals the code
//! length.

use super::Code;
use std::fmt;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub hits: usize,
    pub blows: usize,
}

impl Score {
    /// Score `guess` against `secret`
    ///
    /// # Panics
    /// Panics in debug mode if the codes differ in length
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::{Code, Score};
    ///
    /// let secret = Code::parse("0,1,2", 3).unwrap();
    /// let guess = Code::parse("1,0,2", 3).unwrap();
    ///
    /// // Position 2 matches; positions 0 and 1 are blows even though
    /// // both digits occur in the secret
    /// assert_eq!(Score::calculate(&guess, &secret), Score { hits: 1, blows: 2 });
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "codes must have equal length");

        let hits = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .filter(|(g, s)| g == s)
            .count();

        Self {
            hits,
            blows: guess.len() - hits,
        }
    }

    /// Number of positions scored
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.hits + self.blows
    }

    /// Check whether every position is a hit
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.blows == 0 && self.hits > 0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hit: {}\nBlow: {}", self.hits, self.blows)
    }
}
