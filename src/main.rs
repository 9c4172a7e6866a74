//! Hit and Blow - CLI
//!
//! Play in the terminal, watch the solver crack a secret, or benchmark it.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hit_and_blow::{
    commands::{BenchmarkConfig, SolveConfig, make_rng, run_benchmark, run_play, solve_secret},
    core::{Code, Difficulty},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hit_and_blow",
    about = "Hit and Blow: guess the secret digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: normal (3 digits) or hard (4 digits); asks when omitted
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy: minimax (default), random, first
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented game (default)
    Play,

    /// Full-screen terminal game
    Tui,

    /// Let the solver crack a given secret
    Solve {
        /// The secret as comma-separated digits, e.g. 5,0,3
        secret: String,

        /// Show candidate counts for every try
        #[arg(long)]
        details: bool,
    },

    /// Simulate many games with the solver
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.difficulty, cli.seed),
        Commands::Tui => run_tui_command(cli.difficulty, cli.seed),
        Commands::Solve { secret, details } => run_solve_command(&cli.strategy, &secret, details),
        Commands::Benchmark { count } => {
            run_benchmark_command(
                &cli.strategy,
                cli.difficulty.unwrap_or_default(),
                count,
                cli.seed.unwrap_or(0),
            );
            Ok(())
        }
    }
}

fn run_play_command(difficulty: Option<Difficulty>, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_play(&mut input, &mut output, difficulty, &mut rng)?;
    Ok(())
}

fn run_tui_command(difficulty: Option<Difficulty>, seed: Option<u64>) -> Result<()> {
    use hit_and_blow::interactive::{App, run_tui};

    let app = App::new(difficulty, make_rng(seed));
    run_tui(app)
}

fn run_solve_command(strategy_name: &str, secret: &str, details: bool) -> Result<()> {
    let secret = secret
        .parse::<Code>()
        .with_context(|| format!("Invalid secret '{secret}'"))?;
    let difficulty = Difficulty::from_code_length(secret.len()).with_context(|| {
        format!(
            "Secret must have {} or {} digits",
            Difficulty::Normal.code_length(),
            Difficulty::Hard.code_length()
        )
    })?;

    let solver = Solver::new(StrategyType::from_name(strategy_name), difficulty);
    solve_command(secret, details, &solver)
}

fn solve_command<S: Strategy>(secret: Code, details: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(secret);
    let result = solve_secret(config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, difficulty: Difficulty, count: usize, seed: u64) {
    let strategy = StrategyType::from_name(strategy_name);
    let name = strategy.name();
    let solver = Solver::new(strategy, difficulty);

    println!("Running benchmark: {count} {difficulty} games with the {name} strategy...");

    let config = BenchmarkConfig { count, seed };
    let result = run_benchmark(&solver, name, &config);
    print_benchmark_result(&result);
}
