//! Command-line interface for events-testgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate 1000 events over the last 90 days into test_events.csv
//! events-testgen
//!
//! # Smaller run with a different seed and window
//! events-testgen --count 250 --seed 7 --days 30 -o /tmp/events.csv
//!
//! # Headerless output for appending to an existing file
//! events-testgen --no-header -o more_events.csv
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use events_core::{Pools, Window};
use events_generator::EventGenerator;
use events_populate_csv::CsvPopulator;
use events_testgen::SummaryReport;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "events-testgen")]
#[command(about = "Generates randomized commit, pull-request, and deploy events as CSV test data")]
#[command(long_about = None)]
struct Cli {
    /// Number of events to generate (0 produces a header-only file)
    #[arg(long, default_value = "1000")]
    count: u64,

    /// Output CSV file path
    #[arg(long, short = 'o', default_value = "test_events.csv")]
    output: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Length in days of the trailing window event timestamps fall in
    #[arg(long, default_value = "90", value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Skip the header row in the CSV output
    #[arg(long)]
    no_header: bool,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let window = Window::trailing_days(Utc::now(), i64::from(cli.days));
    let mut generator = EventGenerator::new(Pools::default(), window, cli.seed)
        .context("Failed to construct event generator")?;

    tracing::info!("Generating {} events (seed={})", cli.count, cli.seed);
    let events = generator.generate(cli.count);

    let populator = CsvPopulator::new().with_header(!cli.no_header);
    let metrics = populator
        .write_events(&cli.output, &events)
        .with_context(|| format!("Failed to write events to {:?}", cli.output))?;

    tracing::info!(
        "Wrote {:?}: {} rows, {} bytes in {:?}",
        cli.output,
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration
    );

    println!("{}", SummaryReport::from_events(&events, &window));

    Ok(())
}
