//! Hit and Blow
//!
//! A digit-guessing game in the Mastermind family, with a line-oriented mode,
//! a terminal UI, and a solver that can play by itself.
//!
//! Every position of a guess that is not a hit counts as a blow, so the score
//! for an `N`-digit code always satisfies `hits + blows == N`.
//!
//! # Quick Start
//!
//! ```rust
//! use hit_and_blow::core::{Code, Score};
//! use hit_and_blow::game::GuessingGame;
//!
//! let mut game = GuessingGame::new();
//! game.configure_with_secret("0,1,2".parse().unwrap()).unwrap();
//!
//! let score = game.submit_guess("1,0,2").unwrap();
//! assert_eq!(score, Score { hits: 1, blows: 2 });
//!
//! game.submit_guess("0,1,2").unwrap();
//! assert!(game.is_solved());
//! assert_eq!(game.report(), "Correct!\nTries: 2");
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
