//! Criteria sweep CLI
//!
//! Usage: reality_sweep <axis> [criteria flags] [--json]
//!
//! Example:
//!   reality_sweep minSalary
//!   reality_sweep maxAge --religion orthodox --json
//!
//! Prints the estimate at every position of one slider, holding the other
//! criteria fixed.

mod args;
mod logging;

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use reality_estimator::app::report::group_thousands;
use reality_estimator::{ReferenceDataset, SweepAxis, sweep};
use tracing::info;

use crate::args::{CriteriaArgs, warn_invalid};

/// Show how the estimate changes across one slider's range.
#[derive(Parser)]
#[command(name = "reality_sweep", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Slider to sweep: minAge, maxAge, minHeight, maxHeight, minSalary.
    axis: SweepAxis,

    #[command(flatten)]
    criteria: CriteriaArgs,

    /// Print the points as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = cli.criteria.to_criteria();
    warn_invalid(&base);

    let start = Instant::now();
    let points = sweep(&base, cli.axis, ReferenceDataset::cyprus());
    info!(
        axis = %cli.axis,
        points = points.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "sweep finished"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&points).context("serializing sweep")?;
        println!("{json}");
        return Ok(());
    }

    println!("{:>10}  {:>10}  {:>10}", cli.axis.to_string(), "percent", "count");
    for point in &points {
        println!(
            "{:>10}  {:>9.2}%  {:>10}",
            point.value,
            point.percentage,
            group_thousands(point.count as i64)
        );
    }
    Ok(())
}
