/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Command-line interface: parameter table in, counts table out.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::crystal::ConstantsCache;
use crate::estimator::{count, CountingMethod};
use crate::input::{parse_table, write_counts_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Convert region areas through areal densities
    Area,
    /// Convert region volumes through the bulk density
    Volume,
}

impl From<Mode> for CountingMethod {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Area => CountingMethod::Area,
            Mode::Volume => CountingMethod::Volume,
        }
    }
}

/// Estimate perimeter, interface, surface, and total atom counts of
/// supported nanoparticles from footprint radius (or curvature radius),
/// contact angle, and element.
#[derive(Debug, Parser)]
#[command(name = "npcount-rs", version)]
pub struct Cli {
    /// Input CSV with columns: r (A), R (A), Theta, Element,
    /// Interface Facet, Surface Facet
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "output_atomcounts.csv")]
    output: PathBuf,

    /// Counting method
    #[arg(short, long, value_enum, default_value = "volume")]
    mode: Mode,
}

/// Parse arguments and run the estimation over every input row
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let method = CountingMethod::from(cli.mode);
    let started = Instant::now();

    let rows = parse_table(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    info!("read {} rows from {}", rows.len(), cli.input.display());

    let cache = ConstantsCache::global();
    let mut results = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        // header occupies line 1
        let line = index + 2;
        let radius = row.resolved_radius(line)?;
        let outcome = count(
            cache,
            method,
            &row.element,
            radius,
            row.theta,
            row.interface_facet,
            row.surface_facet,
        )
        .with_context(|| format!("row at line {} ({})", line, row.element))?;

        for advisory in &outcome.advisories {
            warn!("line {}: {}", line, advisory);
        }
        results.push(outcome.value);
    }

    write_counts_file(&cli.output, &results)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        "wrote {} rows to {} in {:.3}s ({} method)",
        results.len(),
        cli.output.display(),
        started.elapsed().as_secs_f64(),
        method
    );

    Ok(())
}
