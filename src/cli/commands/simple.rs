//! Simple benchmark mode: a fixed handful of timed comparisons.

use crate::bench::{metrics, report};
use crate::cli::Cli;
use crate::diff::{self, DiffConfig};
use crate::error::Result;
use crate::spec;
use std::io::Write;
use std::time::{Duration, Instant};

/// Timed comparisons per simple run.
const ITERATIONS: u32 = 5;

/// Execute the simple benchmark mode.
///
/// # Errors
///
/// Returns an error when a specification fails to load or the report
/// destination cannot be written.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut out = super::open_report_writer(cli.output.as_deref())?;

    writeln!(out, "{}", report::render_banner("basic", &cli.base, &cli.revision))?;

    writeln!(out, "Loading specifications...")?;
    let load_start = Instant::now();
    let base = spec::load_document(&cli.base)?;
    let revision = spec::load_document(&cli.revision)?;
    writeln!(out, "Specifications loaded in {:?}\n", load_start.elapsed())?;

    let config = DiffConfig::new();

    writeln!(out, "Warming up...")?;
    if let Err(err) = diff::compare(&config, &base, &revision) {
        tracing::warn!(error = %err, "warmup comparison failed");
    }

    writeln!(out, "Running {ITERATIONS} iterations:")?;
    let mut total = Duration::ZERO;
    for iteration in 1..=ITERATIONS {
        let start = Instant::now();
        match diff::compare(&config, &base, &revision) {
            Ok(result) => {
                let elapsed = start.elapsed();
                total += elapsed;
                let changes = result.paths.as_ref().map_or(0, metrics::count_changes);
                writeln!(
                    out,
                    "{}",
                    report::render_simple_iteration(iteration, elapsed, changes)
                )?;
            }
            Err(err) => {
                tracing::warn!(iteration, error = %err, "comparison failed");
            }
        }
    }

    writeln!(out, "{}", report::render_simple_average(total / ITERATIONS))?;
    out.flush()?;
    Ok(())
}
