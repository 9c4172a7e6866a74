//! Hit and Blow solving algorithms
//!
//! Narrows the code space with each score and picks the next guess.

mod engine;
pub mod partition;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{FirstStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
