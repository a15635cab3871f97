//! Score a predicted distance matrix against a reference one.
//!
//! ```bash
//! triplet-concordance                      # reads reference.csv and predicted.csv
//! triplet-concordance ref.csv pred.csv --threads 8
//! RUST_LOG=debug triplet-concordance --counts
//! ```
//!
//! The score is the only thing written to stdout. Logs go to stderr.

use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use triplet_concordance::matrix::text::read_csv;
use triplet_concordance::{Matrix, concordance, concordance_parallel};

#[derive(Parser, Debug)]
#[command(name = "triplet-concordance", version)]
#[command(about = "Triplet rank concordance between two square matrices")]
struct Args {
    /// Reference matrix, comma-separated, one row per line.
    #[arg(default_value = "reference.csv")]
    reference: PathBuf,

    /// Predicted matrix, same format and size as the reference.
    #[arg(default_value = "predicted.csv")]
    predicted: PathBuf,

    /// Maximum worker threads. 1 runs the single-threaded path.
    /// Defaults to the available parallelism.
    #[arg(long, env = "CONCORDANCE_THREADS")]
    threads: Option<usize>,

    /// Also print the concordant and total triplet counts on stderr.
    #[arg(long)]
    counts: bool,
}

/// Io errors already name the file, so the context only names the role.
fn load(path: &Path, role: &str) -> anyhow::Result<Matrix> {
    read_csv(path).with_context(|| format!("Failed to load {} matrix", role))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let reference = load(&args.reference, "reference")?;
    let predicted = load(&args.predicted, "predicted")?;

    let threads = args
        .threads
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()));

    let start = Instant::now();
    let result = if threads <= 1 {
        concordance(&reference, &predicted)
    } else {
        concordance_parallel(&reference, &predicted, threads)
    };
    let result = result.context("Failed to score predicted matrix against reference")?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(n = reference.rows(), threads, elapsed_ms, "scored");
    if args.counts {
        eprintln!("{}/{} triplets concordant", result.concordant(), result.triplets());
    }

    println!("{}", result.score());
    Ok(())
}
