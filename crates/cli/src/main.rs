//! Command-line front end for the synthesis search.
//!
//! Wires the length cap, iteration budget and seed into a search over the
//! arithmetic reference problem and reports the best program found.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;
use synth_core::{evaluate, PrimitiveSet, Program};
use synth_mcts::problems::{arith_primitives, TargetGoal};
use synth_mcts::{Search, SearchConfig};

/// Search for an arithmetic program that evaluates to a target value.
#[derive(Parser)]
#[command(name = "synth")]
#[command(about = "MCTS program synthesis over {add(2), 1, 2}")]
struct Cli {
    /// Maximum program length (n_max).
    #[arg(long, default_value = "5")]
    max_len: usize,

    /// Number of search iterations (n_iter).
    #[arg(long, short = 'n', default_value = "1000")]
    iterations: usize,

    /// Random seed for reproducibility.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// UCB1 exploration constant.
    #[arg(long, default_value = "1.4")]
    exploration: f64,

    /// Target value the synthesized program should evaluate to.
    #[arg(long, default_value = "6.0")]
    target: f64,

    /// Emit the report as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

/// Machine-readable run report.
#[derive(Serialize)]
struct Report {
    best_program: Vec<String>,
    best_value: Option<f64>,
    best_score: f64,
    root_choice: Vec<String>,
    root_choice_mean: f64,
    iterations: usize,
    seed: u64,
    elapsed_ms: u128,
}

fn names(program: &Program, primitives: &PrimitiveSet) -> Vec<String> {
    program
        .ids()
        .iter()
        .map(|&id| primitives.get(id).name().to_string())
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let primitives = arith_primitives();
    let config = SearchConfig::new(cli.max_len, cli.iterations).with_exploration(cli.exploration);
    let rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let mut search = Search::new(config, &primitives, TargetGoal::new(cli.target), rng);

    let start = Instant::now();
    let result = search.run().context("search produced no candidates")?;
    let elapsed = start.elapsed();

    let best_value = evaluate(&primitives, &result.best_program).ok();

    if cli.json {
        let report = Report {
            best_program: names(&result.best_program, &primitives),
            best_value,
            best_score: result.best_score.get(),
            root_choice: names(&result.root_choice, &primitives),
            root_choice_mean: result.root_choice_mean,
            iterations: cli.iterations,
            seed: cli.seed,
            elapsed_ms: elapsed.as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Best program found: {}",
        result.best_program.display(&primitives)
    );
    match best_value {
        Some(value) => println!("Evaluated to: {value}"),
        None => println!("Evaluated to: (malformed)"),
    }
    println!("Goal score: {}", result.best_score);
    println!(
        "Greedy root choice: {} (mean {:.3} over {} visits)",
        result.root_choice.display(&primitives),
        result.root_choice_mean,
        result.root_choice_visits
    );
    println!(
        "{} iterations in {:.1?} ({} rollouts through the root)",
        cli.iterations, elapsed, result.root_visits
    );

    Ok(())
}
