//! The Hit and Blow game
//!
//! Owns the secret, validates and scores guesses, and counts tries.

mod error;
mod state;

pub use error::GameError;
pub use state::{GuessingGame, Phase, Turn};
