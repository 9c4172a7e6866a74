//! Game difficulty
//!
//! Each difficulty fixes the number of digits in the secret.

use std::fmt;
use std::str::FromStr;

/// Difficulty chosen once at the start of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Three-digit secret
    #[default]
    Normal,
    /// Four-digit secret
    Hard,
}

/// Error returned when a difficulty name is not one of the known options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyError(pub String);

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected one of: {}",
            self.0,
            Difficulty::NAMES.join(", ")
        )
    }
}

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// Every difficulty, in menu order
    pub const ALL: [Self; 2] = [Self::Normal, Self::Hard];

    /// Option strings shown in the difficulty menu, in menu order
    pub const NAMES: [&'static str; 2] = ["normal", "hard"];

    /// Number of digits in the secret for this difficulty
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::Normal.code_length(), 3);
    /// assert_eq!(Difficulty::Hard.code_length(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Normal => 3,
            Self::Hard => 4,
        }
    }

    /// The option string for this difficulty
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Look up the difficulty whose secret has `length` digits
    #[must_use]
    pub fn from_code_length(length: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code_length() == length)
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parse an exact option string; no case folding or abbreviations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| DifficultyError(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
