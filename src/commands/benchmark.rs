//! Benchmark command
//!
//! Plays many games with the solver and collects try-count statistics.

use super::solve::{SolveConfig, solve_secret};
use crate::core::{Code, Difficulty};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Game `i` draws its secret from `StdRng::seed_from_u64(seed + i)`
    pub seed: u64,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub strategy: String,
    pub total_games: usize,
    pub solved: usize,
    pub total_tries: usize,
    pub average_tries: f64,
    pub min_tries: usize,
    pub max_tries: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Secret for game number `index`
#[must_use]
pub fn benchmark_secret(difficulty: Difficulty, seed: u64, index: usize) -> Code {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
    Code::random(difficulty, &mut rng)
}

/// Run the solver against `config.count` random secrets in parallel
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    strategy_name: &str,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let difficulty = solver.difficulty();

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<Option<usize>> = (0..config.count)
        .into_par_iter()
        .map(|index| {
            let secret = benchmark_secret(difficulty, config.seed, index);
            let outcome = match solve_secret(SolveConfig::new(secret.clone()), solver) {
                Ok(result) if result.success => Some(result.try_count()),
                Ok(_) => {
                    warn!(%secret, "solver hit the turn limit");
                    None
                }
                Err(err) => {
                    warn!(%secret, %err, "solver failed");
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let tries: Vec<usize> = outcomes.iter().flatten().copied().collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &t in &tries {
        *distribution.entry(t).or_insert(0) += 1;
    }

    let total_tries: usize = tries.iter().sum();
    let solved = tries.len();

    BenchmarkResult {
        difficulty,
        strategy: strategy_name.to_string(),
        total_games: config.count,
        solved,
        total_tries,
        average_tries: if solved > 0 {
            total_tries as f64 / solved as f64
        } else {
            0.0
        },
        min_tries: tries.iter().min().copied().unwrap_or(0),
        max_tries: tries.iter().max().copied().unwrap_or(0),
        distribution,
        duration,
        games_per_second: config.count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
