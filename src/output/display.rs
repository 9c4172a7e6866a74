//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTry {}: {}  {}  Hit: {} Blow: {}",
            i + 1,
            step.guess.to_string().bright_white().bold(),
            score_to_pegs(step.score).green(),
            step.score.hits,
            step.score.blows
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} tries!", result.try_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Gave up after {} tries", result.try_count())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Difficulty:       {}", result.difficulty);
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        if result.solved == result.total_games {
            format!("{}", result.solved).green()
        } else {
            format!("{}", result.solved).red()
        }
    );
    println!(
        "   Average tries:    {}",
        format!("{:.2}", result.average_tries)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_tries).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_tries).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for tries in result.min_tries..=result.max_tries {
        let count = result.distribution.get(&tries).copied().unwrap_or(0);
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {tries:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
