//! Full benchmark mode: the JMH-compatible multi-fork run.

use crate::bench::{report, runner};
use crate::cli::Cli;
use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::spec;
use std::io::Write;
use std::time::Duration;

/// Execute the full benchmark mode.
///
/// # Errors
///
/// Returns an error when a specification fails to load or the report
/// destination cannot be written.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = BenchmarkConfig::new(
        &cli.name,
        cli.warmup,
        cli.measurement,
        cli.forks,
        Duration::from_secs(cli.duration),
    );
    config.output = cli.output.clone();
    config.compare_file = cli.compare.clone();
    config.push_description("Base Spec", cli.base.display().to_string());
    config.push_description("Revision Spec", cli.revision.display().to_string());

    let mut out = super::open_report_writer(config.output.as_deref())?;

    // Header precedes document loading, as in JMH's output order.
    write!(out, "{}", report::render_header(&config))?;
    writeln!(out)?;
    out.flush()?;

    let base = spec::load_document(&cli.base)?;
    let revision = spec::load_document(&cli.revision)?;
    tracing::info!(
        base = %cli.base.display(),
        revision = %cli.revision.display(),
        "documents loaded; starting {} fork(s)",
        config.forks
    );

    let samples = runner::run(&config, &base, &revision, &mut out)?;

    write!(out, "{}", report::render_results(&config, samples.as_slice())?)?;
    out.flush()?;
    Ok(())
}
