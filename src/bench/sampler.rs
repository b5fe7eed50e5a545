//! Time-boxed throughput sampling.
//!
//! One sample runs the comparator in a tight loop until a wall-clock
//! budget elapses and reports successful operations per second. A failed
//! comparison is a dropped operation, not a failed sample: it is logged
//! and the loop keeps going. There is no mid-sample cancellation; once
//! started, a sample runs out its budget.

use crate::diff::{self, DiffConfig};
use crate::spec::SpecDocument;
use std::time::{Duration, Instant};

/// Run `op` repeatedly until `budget` elapses and return successful
/// operations per second of actual elapsed time.
///
/// Returns `0.0` when no operation succeeds. The result is always finite
/// and non-negative: the elapsed time is only used as a divisor after at
/// least one loop turn, and is guarded against a zero reading.
pub fn sample_op<F>(mut op: F, budget: Duration) -> f64
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    let deadline = start + budget;

    let mut count: u64 = 0;
    while Instant::now() < deadline {
        if op() {
            count += 1;
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    if count == 0 || elapsed <= 0.0 {
        return 0.0;
    }
    count as f64 / elapsed
}

/// Sample the throughput of comparing two fixed documents.
///
/// The documents are borrowed shared and never copied; the comparator
/// contract guarantees it does not mutate them.
#[must_use]
pub fn sample(base: &SpecDocument, revision: &SpecDocument, budget: Duration) -> f64 {
    let config = DiffConfig::new();
    sample_op(
        || match diff::compare(&config, base, revision) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "comparison failed inside timed sample");
                false
            }
        },
        budget,
    )
}
