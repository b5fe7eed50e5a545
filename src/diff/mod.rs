//! Structural comparison of two specification documents.
//!
//! The diff is exactly as deep as the harness needs: which paths were
//! added, deleted, or modified, and inside a modified path which
//! operations were added, deleted, or modified. Operation bodies compare
//! by structural equality.
//!
//! The comparator never mutates its inputs; both documents are borrowed
//! shared for the whole run.

use crate::error::Result;
use crate::spec::{HttpMethod, SpecDocument};
use std::collections::BTreeMap;

/// Comparison options.
///
/// Carries no options yet; the type exists so the comparator signature
/// stays stable when options arrive.
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {}

impl DiffConfig {
    /// Create a default comparison configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

/// Operation-level changes inside one modified path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationsDiff {
    /// Methods present only in the revision.
    pub added: Vec<HttpMethod>,
    /// Methods present only in the base.
    pub deleted: Vec<HttpMethod>,
    /// Methods present in both with differing bodies.
    pub modified: Vec<HttpMethod>,
}

impl OperationsDiff {
    /// True when no operation changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.modified.is_empty()
    }
}

/// Changes to one path present in both documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDiff {
    /// Operation-level changes, when any exist.
    pub operations: Option<OperationsDiff>,
}

/// Path-level changes between two documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathsDiff {
    /// Paths present only in the revision, sorted.
    pub added: Vec<String>,
    /// Paths present only in the base, sorted.
    pub deleted: Vec<String>,
    /// Paths present in both with operation changes.
    pub modified: BTreeMap<String, PathDiff>,
}

impl PathsDiff {
    /// True when the documents' path tables are identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.modified.is_empty()
    }
}

/// Result of comparing two documents.
///
/// `paths` is `None` when the path tables are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub paths: Option<PathsDiff>,
}

/// Compare two documents and enumerate their structural differences.
///
/// # Errors
///
/// Reserved for structurally invalid inputs; the current model is
/// validated at load time, so this comparator has no failure modes yet.
pub fn compare(
    _config: &DiffConfig,
    base: &SpecDocument,
    revision: &SpecDocument,
) -> Result<DiffResult> {
    let mut diff = PathsDiff::default();

    for (path, base_item) in &base.paths {
        match revision.paths.get(path) {
            None => diff.deleted.push(path.clone()),
            Some(revision_item) => {
                let ops = diff_operations(base_item, revision_item);
                if !ops.is_empty() {
                    diff.modified.insert(
                        path.clone(),
                        PathDiff {
                            operations: Some(ops),
                        },
                    );
                }
            }
        }
    }

    for path in revision.paths.keys() {
        if !base.paths.contains_key(path) {
            diff.added.push(path.clone());
        }
    }

    Ok(DiffResult {
        paths: if diff.is_empty() { None } else { Some(diff) },
    })
}

fn diff_operations(
    base: &crate::spec::PathItem,
    revision: &crate::spec::PathItem,
) -> OperationsDiff {
    let mut ops = OperationsDiff::default();

    for method in HttpMethod::ALL {
        match (base.operation(method), revision.operation(method)) {
            (None, Some(_)) => ops.added.push(method),
            (Some(_), None) => ops.deleted.push(method),
            (Some(a), Some(b)) if a != b => ops.modified.push(method),
            _ => {}
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::PathItem;
    use serde_json::json;

    fn doc(paths: &[(&str, PathItem)]) -> SpecDocument {
        SpecDocument {
            openapi: Some("3.0.0".to_string()),
            swagger: None,
            paths: paths
                .iter()
                .map(|(p, item)| ((*p).to_string(), item.clone()))
                .collect(),
        }
    }

    fn item(get: Option<serde_json::Value>, post: Option<serde_json::Value>) -> PathItem {
        PathItem {
            get,
            post,
            ..PathItem::default()
        }
    }

    #[test]
    fn test_identical_documents_have_no_diff() {
        let base = doc(&[("/pets", item(Some(json!({"summary": "list"})), None))]);
        let result = compare(&DiffConfig::new(), &base, &base.clone()).unwrap();
        assert_eq!(result.paths, None);
    }

    #[test]
    fn test_added_and_deleted_paths() {
        let base = doc(&[("/old", item(Some(json!({})), None))]);
        let revision = doc(&[("/new", item(Some(json!({})), None))]);

        let result = compare(&DiffConfig::new(), &base, &revision).unwrap();
        let paths = result.paths.unwrap();
        assert_eq!(paths.added, vec!["/new".to_string()]);
        assert_eq!(paths.deleted, vec!["/old".to_string()]);
        assert!(paths.modified.is_empty());
    }

    #[test]
    fn test_operation_level_diff() {
        let base = doc(&[(
            "/pets",
            item(Some(json!({"summary": "list"})), Some(json!({"summary": "make"}))),
        )]);
        let revision = doc(&[(
            "/pets",
            PathItem {
                get: Some(json!({"summary": "list all"})),
                delete: Some(json!({"summary": "purge"})),
                ..PathItem::default()
            },
        )]);

        let result = compare(&DiffConfig::new(), &base, &revision).unwrap();
        let paths = result.paths.unwrap();
        let ops = paths.modified["/pets"].operations.as_ref().unwrap();
        assert_eq!(ops.added, vec![HttpMethod::Delete]);
        assert_eq!(ops.deleted, vec![HttpMethod::Post]);
        assert_eq!(ops.modified, vec![HttpMethod::Get]);
    }

    #[test]
    fn test_unchanged_common_path_not_marked_modified() {
        let shared = item(Some(json!({"summary": "same"})), None);
        let base = doc(&[("/same", shared.clone()), ("/gone", item(None, Some(json!({}))))]);
        let revision = doc(&[("/same", shared)]);

        let result = compare(&DiffConfig::new(), &base, &revision).unwrap();
        let paths = result.paths.unwrap();
        assert!(!paths.modified.contains_key("/same"));
        assert_eq!(paths.deleted, vec!["/gone".to_string()]);
    }
}
