#![warn(missing_docs)]
//! VoteBench CLI Library
//!
//! Non-interactive driver that orchestrates the pipeline the core crates
//! expose: synthetic generation, the instrumented vote, and the CSV
//! ledger. One data row is appended per input size.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     votebench_cli::run()
//! }
//! ```

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use votebench_core::{
    Distribution, PerfTracker, find_majority_element, generate, generate_with_rng,
};
use votebench_report::{CsvExporter, CsvRecord, record_to_json};

/// VoteBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "votebench")]
#[command(author, version, about = "VoteBench - majority-vote benchmark driver")]
pub struct Cli {
    /// Input sizes to run, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "100,1000,10000,100000")]
    pub sizes: Vec<u64>,

    /// Input distribution: random, sorted, reverse-sorted, nearly-sorted
    #[arg(long, default_value = "random")]
    pub distribution: Distribution,

    /// CSV ledger path (appended to, header written once)
    #[arg(short, long, default_value = "target/votebench/benchmarks.csv")]
    pub output: PathBuf,

    /// Seed for deterministic input generation (entropy-based when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit one JSON object per run on stdout instead of the summary lines
    #[arg(long)]
    pub json: bool,
}

/// Parse the process arguments and run the driver.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the driver with already-parsed arguments.
///
/// For each size: generate the input, run the vote against a fresh
/// tracker, print a summary (or JSON) line, and append one row to the
/// ledger. Export failures abort the remaining sizes; retry policy, if
/// any, belongs to whoever invoked us.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    anyhow::ensure!(!cli.sizes.is_empty(), "at least one input size is required");

    let exporter = CsvExporter::new(&cli.output);
    let mut rng = cli.seed.map(StdRng::seed_from_u64);
    let algorithm = format!("MajorityVote-{}", cli.distribution);

    if !cli.json {
        println!(
            "Running majority-vote benchmarks, distribution: {}",
            cli.distribution
        );
        println!("Results are appended to {}\n", cli.output.display());
    }

    for &n in &cli.sizes {
        let values = match rng.as_mut() {
            Some(rng) => generate_with_rng(n as usize, cli.distribution, rng),
            None => generate(n as usize, cli.distribution),
        };

        let tracker = PerfTracker::new();
        let candidate = find_majority_element(&values, Some(&tracker))
            .with_context(|| format!("majority vote failed for n={}", n))?;

        let snapshot = tracker.snapshot();
        let record = CsvRecord::new(algorithm.clone(), n, &snapshot);

        if cli.json {
            println!("{}", record_to_json(&record)?);
        } else {
            println!(
                "n={:<8} candidate={:<5} time={:.3} ms comparisons={} accesses={} mem_delta={} bytes",
                n,
                candidate,
                snapshot.elapsed_ms,
                snapshot.comparisons,
                snapshot.array_accesses,
                snapshot.memory_delta_bytes
            );
        }

        exporter
            .export(&record)
            .with_context(|| format!("failed to append to {}", cli.output.display()))?;
    }

    Ok(())
}
