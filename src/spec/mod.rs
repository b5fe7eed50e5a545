//! OpenAPI document model and loader.
//!
//! The model is deliberately shallow: the harness only needs the path
//! table and per-method operation presence, so operation bodies stay as
//! raw JSON values. Unknown top-level and path-level fields are ignored.
//!
//! Documents are loaded once per process run and shared read-only across
//! every iteration and fork. Re-parsing per iteration would turn the
//! measurement into a parsing benchmark.

use crate::error::{BenchError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::Path;

/// HTTP methods that count as endpoint operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Every method the harness recognizes, in reporting order.
    pub const ALL: [Self; 7] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
    ];

    /// Uppercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the path table: optional operation body per HTTP method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    pub get: Option<Value>,
    pub post: Option<Value>,
    pub put: Option<Value>,
    pub delete: Option<Value>,
    pub options: Option<Value>,
    pub head: Option<Value>,
    pub patch: Option<Value>,
}

impl PathItem {
    /// Operation body for the given method, if defined.
    #[must_use]
    pub const fn operation(&self, method: HttpMethod) -> Option<&Value> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
        }
    }

    /// Methods with a defined operation, in `HttpMethod::ALL` order.
    pub fn defined_methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter(|method| self.operation(*method).is_some())
    }
}

/// In-memory OpenAPI document, shared read-only across all samples.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecDocument {
    /// OpenAPI 3.x version marker.
    pub openapi: Option<String>,
    /// Swagger 2.x version marker.
    pub swagger: Option<String>,
    /// Path table; keys are route templates like `/pets/{id}`.
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

/// Load a specification document from a JSON or YAML file.
///
/// `.yaml`/`.yml` extensions parse as YAML; everything else tries JSON
/// first and falls back to YAML.
///
/// # Errors
///
/// Returns an error when the file is unreadable, when the content parses
/// as neither JSON nor YAML, or when the parsed document carries no
/// `openapi`/`swagger` version marker.
pub fn load_document(path: &Path) -> Result<SpecDocument> {
    let raw = fs::read_to_string(path).map_err(|source| BenchError::SpecRead {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: SpecDocument = match path.extension().and_then(OsStr::to_str) {
        Some("yaml" | "yml") => serde_yaml::from_str(&raw).map_err(|e| BenchError::SpecParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        _ => serde_json::from_str(&raw)
            .or_else(|_| serde_yaml::from_str(&raw))
            .map_err(|e: serde_yaml::Error| BenchError::SpecParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?,
    };

    if doc.openapi.is_none() && doc.swagger.is_none() {
        return Err(BenchError::NotASpec {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        paths = doc.paths.len(),
        "loaded specification"
    );
    Ok(doc)
}
