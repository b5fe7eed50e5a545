//! Descriptive size metrics for reports.
//!
//! Endpoint and change counts describe the workload; they never gate or
//! alter measurement.

use crate::diff::PathsDiff;
use crate::spec::SpecDocument;

/// Count defined HTTP-method operations across the document's path table.
///
/// A path with no defined method contributes nothing.
#[must_use]
pub fn count_endpoints(doc: &SpecDocument) -> usize {
    doc.paths
        .values()
        .map(|item| item.defined_methods().count())
        .sum()
}

/// Flatten a path diff into a total change count: added paths + deleted
/// paths + per-modified-path operation changes.
#[must_use]
pub fn count_changes(paths: &PathsDiff) -> usize {
    let mut count = paths.added.len() + paths.deleted.len();
    for path_diff in paths.modified.values() {
        if let Some(ops) = &path_diff.operations {
            count += ops.added.len() + ops.deleted.len() + ops.modified.len();
        }
    }
    count
}
