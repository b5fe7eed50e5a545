//! CLI definitions and entry point.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// JMH-compatible throughput benchmark for OpenAPI spec diffing
#[derive(Parser, Debug)]
#[command(name = "oasbench", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the base OpenAPI specification
    #[arg(long, default_value = "specs/base.json")]
    pub base: PathBuf,

    /// Path to the revision OpenAPI specification
    #[arg(long, default_value = "specs/revision.json")]
    pub revision: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Previously saved JMH result file (accepted, not yet consumed)
    #[arg(long)]
    pub compare: Option<PathBuf>,

    /// Warmup iterations per fork
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub warmup: u32,

    /// Measurement iterations per fork
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub measurement: u32,

    /// Forks (full repetitions of the warmup + measurement sequence)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub forks: u32,

    /// Iteration time budget in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Benchmark mode
    #[arg(long, value_enum, default_value = "full")]
    pub mode: Mode,

    /// Benchmark display name in JMH dotted format
    #[arg(long, default_value = "org.oasdiff.Benchmark")]
    pub name: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Benchmark execution mode.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed handful of timed comparisons with an averaged elapsed time
    Simple,
    /// One measured comparison with load/diff/memory breakdown
    Advanced,
    /// Full JMH-style run: forks, warmup, measurement, statistics
    Full,
}
