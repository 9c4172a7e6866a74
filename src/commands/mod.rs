//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{run_play, select_difficulty};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_secret};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the RNG that draws secrets: seeded when reproducibility is requested
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
