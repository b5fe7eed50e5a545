//! Advanced benchmark mode: one measured comparison with a resource
//! breakdown.

use crate::bench::{BenchmarkResult, metrics, report};
use crate::cli::Cli;
use crate::diff::{self, DiffConfig};
use crate::error::Result;
use crate::spec;
use crate::util::mem;
use std::io::Write;
use std::time::Instant;

/// Execute the advanced benchmark mode.
///
/// The reported throughput is the reciprocal of the single diff duration
/// (a latency proxy, kept for report compatibility); only the full mode
/// samples throughput properly.
///
/// # Errors
///
/// Returns an error when a specification fails to load, the comparison
/// fails, or the report destination cannot be written.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut out = super::open_report_writer(cli.output.as_deref())?;

    writeln!(out, "{}", report::render_banner("advanced", &cli.base, &cli.revision))?;

    mem::reclaim_checkpoint();
    let initial_rss = mem::process_rss_bytes();
    if initial_rss.is_none() {
        tracing::debug!("process RSS unavailable on this platform; memory delta reports 0");
    }

    let load_start = Instant::now();
    let base = spec::load_document(&cli.base)?;
    let revision = spec::load_document(&cli.revision)?;
    let load_time = load_start.elapsed();

    let endpoints_base = metrics::count_endpoints(&base);
    let endpoints_rev = metrics::count_endpoints(&revision);

    let diff_start = Instant::now();
    let result = diff::compare(&DiffConfig::new(), &base, &revision)?;
    let diff_time = diff_start.elapsed();

    let memory_delta = match (initial_rss, mem::process_rss_bytes()) {
        (Some(before), Some(after)) => after.saturating_sub(before),
        _ => 0,
    };

    let changes = result.paths.as_ref().map_or(0, metrics::count_changes);

    let bench_result = BenchmarkResult {
        load_time,
        diff_time,
        memory_delta,
        changes,
        endpoints_base,
        endpoints_rev,
        throughput_ops: 1.0 / diff_time.as_secs_f64(),
    };

    writeln!(out, "{}", report::render_advanced(&bench_result))?;
    out.flush()?;
    Ok(())
}
