//! Iteration controller for the full benchmark mode.
//!
//! Drives `forks x (warmup + measurement)` timed samples over one shared
//! pair of documents. Warmup samples run exactly like measurement samples
//! but are discarded. A reclaim checkpoint precedes every iteration so
//! memory housekeeping lands between samples, not inside them. There is
//! no mid-run cancellation: once started, the controller runs every
//! configured fork and iteration to completion.

use crate::bench::report;
use crate::bench::sampler;
use crate::bench::stats::SampleSet;
use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::spec::SpecDocument;
use crate::util::mem;
use std::io::Write;

/// Run the configured forks and iterations, writing per-iteration report
/// lines to `out`, and return the retained measurement samples.
///
/// The returned set holds exactly `forks * measurement_iterations`
/// observations.
///
/// # Errors
///
/// Returns an error when writing a report line fails.
pub fn run<W: Write>(
    config: &BenchmarkConfig,
    base: &SpecDocument,
    revision: &SpecDocument,
    out: &mut W,
) -> Result<SampleSet> {
    let mut samples = SampleSet::with_capacity(config.expected_samples());

    for fork in 1..=config.forks {
        writeln!(out, "{}", report::render_progress(fork - 1, config))?;
        writeln!(out, "# Fork: {fork} of {}", config.forks)?;

        for iteration in 1..=config.warmup_iterations {
            mem::reclaim_checkpoint();
            let ops = sampler::sample(base, revision, config.iteration_duration);
            writeln!(out, "{}", report::render_warmup_line(iteration, ops))?;
        }

        for iteration in 1..=config.measurement_iterations {
            mem::reclaim_checkpoint();
            let ops = sampler::sample(base, revision, config.iteration_duration);
            writeln!(out, "{}", report::render_measurement_line(iteration, ops))?;
            samples.push(ops);
        }

        writeln!(out)?;
        tracing::debug!(fork, samples = samples.len(), "fork complete");
    }

    Ok(samples)
}
