//! JMH-compatible throughput benchmark harness for OpenAPI diffing.
//!
//! Measures how many structural comparisons of two OpenAPI specification
//! documents complete per second, using the JMH methodology: several forks,
//! each running warmup iterations (discarded) followed by measurement
//! iterations (retained), with the retained samples aggregated into a mean,
//! standard deviation, and a 99.9% confidence interval. The report is
//! rendered in JMH's textual format so existing tooling can consume it.
//!
//! Two single-shot modes complement the full run: `simple` averages a fixed
//! handful of timed comparisons, and `advanced` reports load time, diff
//! time, memory delta, and endpoint counts for one comparison.

pub mod bench;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod spec;
pub mod util;

pub use error::{BenchError, Result};
