//! Command-line entry point for the number-draw pipeline.
//!
//! Draws random integer sets within a bounded range, computes the numbers
//! never drawn, and reports the largest prime among them. Configuration
//! comes from flags or the `MIN_RANGE` / `MAX_RANGE` / `NUM_SETS` /
//! `SET_SIZE` environment variables.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use draw_core::{export_report_to_json, run_draw_with_threads, DrawParams, DrawReport};

#[derive(Parser, Debug)]
#[command(
    name = "draw",
    version,
    about = "Draw random integer sets and report the largest undrawn prime"
)]
struct Cli {
    /// Inclusive lower bound of the draw range
    #[arg(long, env = "MIN_RANGE", default_value_t = 0)]
    min_range: i64,

    /// Exclusive upper bound of the draw range
    #[arg(long, env = "MAX_RANGE", default_value_t = 100)]
    max_range: i64,

    /// Number of sets to draw
    #[arg(long, env = "NUM_SETS", default_value_t = 5)]
    num_sets: usize,

    /// Unique integers per set
    #[arg(long, env = "SET_SIZE", default_value_t = 5)]
    set_size: usize,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Number of worker threads (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Write a JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    info!(
        min_range = cli.min_range,
        max_range = cli.max_range,
        num_sets = cli.num_sets,
        set_size = cli.set_size,
        seed = ?cli.seed,
        "starting draw"
    );

    let mut params = DrawParams::default()
        .with_range(cli.min_range, cli.max_range)
        .with_num_sets(cli.num_sets)
        .with_set_size(cli.set_size);
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }

    let outcome = run_draw_with_threads(&params, cli.threads)?;
    let report = DrawReport::new(&params, &outcome);

    for (i, set) in report.sets.iter().enumerate() {
        info!("generated set {}: {:?}", i + 1, set);
    }
    info!(
        "available or missing numbers ({}): {:?}",
        report.available_count, report.available_numbers
    );
    match report.largest_prime {
        Some(prime) => info!("largest prime number: {prime}"),
        None => info!("largest prime number: no primes found"),
    }

    if let Some(path) = &cli.output {
        export_report_to_json(&report, path)
            .map_err(|e| anyhow::anyhow!("failed to write report to {}: {e}", path.display()))?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
