//! Benchmark run configuration.
//!
//! A `BenchmarkConfig` is built once in the command layer from parsed CLI
//! flags and passed by reference into the runner and renderer. No component
//! reads ambient global state.

use std::path::PathBuf;
use std::time::Duration;

/// Immutable configuration for one benchmark run.
///
/// Iteration counts and the fork count are at least 1; the CLI enforces
/// this at parse time.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Display name in JMH dotted format (e.g. `org.oasdiff.Benchmark`).
    pub name: String,
    /// Discarded iterations per fork, run before measurement begins.
    pub warmup_iterations: u32,
    /// Retained iterations per fork.
    pub measurement_iterations: u32,
    /// Full repetitions of the warmup + measurement sequence.
    pub forks: u32,
    /// Wall-clock budget of a single timed iteration.
    pub iteration_duration: Duration,
    /// Report destination; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Previously saved JMH result file. Parsed and carried for CLI
    /// compatibility, but nothing reads it (see DESIGN.md).
    pub compare_file: Option<PathBuf>,
    // Rendered in insertion order, so an ordered pair list rather than a map.
    description_fields: Vec<(String, String)>,
}

impl BenchmarkConfig {
    /// Create a configuration with no output redirection and no
    /// description fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        warmup_iterations: u32,
        measurement_iterations: u32,
        forks: u32,
        iteration_duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            warmup_iterations,
            measurement_iterations,
            forks,
            iteration_duration,
            output: None,
            compare_file: None,
            description_fields: Vec::new(),
        }
    }

    /// Append a free-form description field for the report header.
    pub fn push_description(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.description_fields.push((key.into(), value.into()));
    }

    /// Description fields in insertion order.
    #[must_use]
    pub fn description_fields(&self) -> &[(String, String)] {
        &self.description_fields
    }

    /// Total iterations (warmup + measurement) of a single fork.
    #[must_use]
    pub const fn iterations_per_fork(&self) -> u32 {
        self.warmup_iterations + self.measurement_iterations
    }

    /// Number of samples a complete run retains.
    #[must_use]
    pub const fn expected_samples(&self) -> usize {
        (self.forks * self.measurement_iterations) as usize
    }
}
