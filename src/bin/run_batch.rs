//! Project every growth input in a CSV file, in parallel
//!
//! Reads one projection input per row, runs all projections across the
//! thread pool, and writes a summary CSV of final balances.

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::batch::load_growth_inputs;
use fincalc::growth::project_growth;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Batch growth projections from CSV")]
struct Args {
    /// Input CSV of growth projection rows
    input: PathBuf,

    /// Output CSV of per-row summaries
    #[arg(long, default_value = "batch_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading inputs from {}...", args.input.display());

    let inputs = load_growth_inputs(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} inputs in {:?}", inputs.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    let results: Vec<_> = inputs.par_iter().map(project_growth).collect();

    println!(
        "Projected {} inputs in {:?}",
        results.len(),
        proj_start.elapsed()
    );

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record([
        "Row",
        "Years",
        "FinalBalance",
        "TotalPrincipal",
        "TotalInterest",
    ])?;

    for (i, (input, series)) in inputs.iter().zip(&results).enumerate() {
        let last = series.snapshots.last();
        writer.write_record([
            (i + 1).to_string(),
            input.years.to_string(),
            format!("{:.2}", last.map_or(input.initial_amount, |s| s.total_balance)),
            format!("{:.2}", last.map_or(input.initial_amount, |s| s.total_principal)),
            format!("{:.2}", last.map_or(0.0, |s| s.total_interest)),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
