//! Report rendering.
//!
//! Three independent paths: the simple multi-iteration average, the
//! advanced single-shot table, and the full JMH-compatible run report.
//! Every function here is a pure formatter over already-computed data;
//! the commands and the runner own the writing.

use crate::bench::BenchmarkResult;
use crate::bench::stats;
use crate::config::BenchmarkConfig;
use crate::error::{BenchError, Result};
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

const MEBIBYTE: f64 = 1_048_576.0;

// JMH prints this block verbatim after every run; kept byte-for-byte so
// downstream parsers treat our reports like JMH's.
const DISCLAIMER: &str = "\
REMEMBER: The numbers below are just data. To gain reusable insights, you need to follow up on
why the numbers are the way they are. Use profilers, design factorial experiments, make sure
the benchmarking environment is safe on JVM/OS/HW level, ask for reviews from the domain experts.
Do not assume the numbers tell you what you want them to tell.";

/// Shared banner for the single-shot modes.
#[must_use]
pub fn render_banner(kind: &str, base: &Path, revision: &Path) -> String {
    format!(
        "Starting {kind} OAS diff benchmark...\nComparing:\n  Base: {}\n  Revision: {}\n",
        base.display(),
        revision.display()
    )
}

/// One per-iteration line of the simple report.
#[must_use]
pub fn render_simple_iteration(iteration: u32, elapsed: Duration, changes: usize) -> String {
    format!("  Iteration {iteration}: {elapsed:?} - Found {changes} changes")
}

/// Closing line of the simple report.
#[must_use]
pub fn render_simple_average(average: Duration) -> String {
    format!("\nAverage execution time: {average:?}")
}

/// Fixed-width table for one advanced single-shot result.
#[must_use]
pub fn render_advanced(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Advanced Benchmark Results ===");
    let _ = writeln!(out, "Base endpoints count:     {}", result.endpoints_base);
    let _ = writeln!(out, "Revision endpoints count: {}", result.endpoints_rev);
    let _ = writeln!(out, "Total changes detected:   {}", result.changes);
    let _ = writeln!(out, "Load time:                {:?}", result.load_time);
    let _ = writeln!(out, "Diff computation time:    {:?}", result.diff_time);
    let _ = writeln!(
        out,
        "Total processing time:    {:?}",
        result.load_time + result.diff_time
    );
    let _ = writeln!(
        out,
        "Memory usage:             {:.2} MB",
        result.memory_delta as f64 / MEBIBYTE
    );
    let _ = writeln!(out, "Throughput:               {:.3} ops/s", result.throughput_ops);
    let _ = write!(out, "===================================");
    out
}

/// JMH-style configuration echo printed before the first fork.
#[must_use]
pub fn render_header(config: &BenchmarkConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# JMH-compatible benchmark harness");

    for (key, value) in config.description_fields() {
        let _ = writeln!(out, "# {key}: {value}");
    }

    let _ = writeln!(
        out,
        "# Warmup: {} iterations, {:?} each",
        config.warmup_iterations, config.iteration_duration
    );
    let _ = writeln!(
        out,
        "# Measurement: {} iterations, {:?} each",
        config.measurement_iterations, config.iteration_duration
    );
    let _ = writeln!(out, "# Timeout: 10 min per iteration");
    let _ = writeln!(out, "# Threads: 1 thread");
    let _ = writeln!(out, "# Benchmark mode: Throughput, ops/time");
    let _ = writeln!(out, "# Benchmark: {}", config.name);
    out
}

/// Remaining run time before fork `completed_forks + 1` starts.
#[must_use]
pub fn eta(completed_forks: u32, config: &BenchmarkConfig) -> Duration {
    let per_fork = config.iteration_duration * config.iterations_per_fork();
    per_fork * (config.forks - completed_forks)
}

/// Wall-clock length of the whole configured run.
#[must_use]
pub fn total_run_time(config: &BenchmarkConfig) -> Duration {
    config.iteration_duration * config.iterations_per_fork() * config.forks
}

/// `HH:MM:SS` from whole-unit truncation, minutes and seconds modulo 60.
#[must_use]
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

/// Progress line printed at the top of each fork.
#[must_use]
pub fn render_progress(completed_forks: u32, config: &BenchmarkConfig) -> String {
    let percent = f64::from(completed_forks) * 100.0 / f64::from(config.forks);
    format!(
        "# Run progress: {percent:.2}% complete, ETA {}",
        format_hms(eta(completed_forks, config))
    )
}

/// One warmup iteration line.
#[must_use]
pub fn render_warmup_line(iteration: u32, ops_per_second: f64) -> String {
    format!("# Warmup Iteration {iteration:3}: {ops_per_second:.3} ops/s")
}

/// One measurement iteration line.
#[must_use]
pub fn render_measurement_line(iteration: u32, ops_per_second: f64) -> String {
    format!("Iteration {iteration:3}: {ops_per_second:.3} ops/s")
}

/// Statistical results block, run-complete line, disclaimer, and the
/// one-line summary table.
///
/// # Errors
///
/// Returns `NoSamples` when no measurement sample was collected.
pub fn render_results(config: &BenchmarkConfig, samples: &[f64]) -> Result<String> {
    if samples.is_empty() {
        return Err(BenchError::NoSamples);
    }

    let avg = stats::mean(samples);
    let (min, max) = stats::min_max(samples);
    let sd = stats::stddev(samples, avg);
    let error = stats::margin_of_error(sd, samples.len());

    let mut out = String::new();
    let _ = writeln!(out, "\nResult \"{}\":", config.name);
    let _ = writeln!(out, "  {avg:.3} ±(99.9%) {error:.3} ops/s [Average]");
    let _ = writeln!(
        out,
        "  (min, avg, max) = ({min:.3}, {avg:.3}, {max:.3}), stdev = {sd:.3}"
    );
    let _ = writeln!(
        out,
        "  CI (99.9%): [{:.3}, {:.3}] (assumes normal distribution)",
        avg - error,
        avg + error
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "\n# Run complete. Total time: {}",
        format_hms(total_run_time(config))
    );
    let _ = writeln!(out, "\n{DISCLAIMER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Benchmark         Mode  Cnt  Score   Error  Units");
    let _ = writeln!(out, "{}", render_summary_row(&config.name, samples.len(), avg, error));
    Ok(out)
}

/// Summary row with the benchmark name split at its last `.` into group
/// and short-name columns when a separator is present.
#[must_use]
pub fn render_summary_row(name: &str, count: usize, avg: f64, error: f64) -> String {
    name.rfind('.').map_or_else(
        || format!("{name:<21} thrpt {count:4} {avg:6.3} ± {error:5.3}  ops/s"),
        |last_dot| {
            let group = &name[..last_dot];
            let short = &name[last_dot + 1..];
            format!("{group:<10}.{short:<10} thrpt {count:4} {avg:6.3} ± {error:5.3}  ops/s")
        },
    )
}
