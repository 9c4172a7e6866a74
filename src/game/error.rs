//! Game error type

use crate::core::CodeError;
use std::fmt;

/// Errors returned by [`GuessingGame`](super::GuessingGame) operations
///
/// Only `InvalidGuessFormat` is a player mistake; the game stays in
/// `AwaitingGuess` and the caller reprompts. The remaining variants mean an
/// operation was called in the wrong phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuessFormat(CodeError),
    UnsupportedSecretLength(usize),
    NotConfigured,
    AlreadyConfigured,
    AlreadySolved,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessFormat(err) => write!(f, "Invalid input: {err}"),
            Self::UnsupportedSecretLength(len) => {
                write!(f, "No difficulty uses a {len}-digit secret")
            }
            Self::NotConfigured => write!(f, "Difficulty has not been chosen yet"),
            Self::AlreadyConfigured => write!(f, "Difficulty has already been chosen"),
            Self::AlreadySolved => write!(f, "Game is already solved"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuessFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuessFormat(err)
    }
}
