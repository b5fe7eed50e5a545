//! Error types and handling for `oasbench`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Supports `anyhow` integration at the edges
//! - Two classes of failure: fatal (load, output creation) aborts the
//!   process; transient (one comparison inside a timed loop) is logged
//!   and skipped by the sampler, never surfaced here
//! - Every fatal error carries enough context for a one-line message

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `oasbench` operations.
#[derive(Error, Debug)]
pub enum BenchError {
    // === Specification loading ===
    /// Specification file could not be read.
    #[error("Failed to read specification '{path}': {source}")]
    SpecRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Specification content could not be parsed as JSON or YAML.
    #[error("Failed to parse specification '{path}': {reason}")]
    SpecParse { path: PathBuf, reason: String },

    /// File parsed but is not an OpenAPI document.
    #[error("Not an OpenAPI document (no openapi/swagger marker): '{path}'")]
    NotASpec { path: PathBuf },

    // === Comparison ===
    /// The comparator rejected its inputs.
    #[error("Comparison failed: {reason}")]
    Compare { reason: String },

    // === Reporting ===
    /// Report output file could not be created.
    #[error("Failed to create output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run finished without collecting any measurement samples.
    #[error("No measurement samples collected; check iteration configuration")]
    NoSamples,

    // === I/O and serialization ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Wrapped anyhow error for edge integrations.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BenchError {
    /// Create a comparison error.
    #[must_use]
    pub fn compare(reason: impl Into<String>) -> Self {
        Self::Compare {
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error.
    ///
    /// Every fatal error terminates the process with exit code 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type using `BenchError`.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::NotASpec {
            path: PathBuf::from("api.json"),
        };
        assert_eq!(
            err.to_string(),
            "Not an OpenAPI document (no openapi/swagger marker): 'api.json'"
        );
    }

    #[test]
    fn test_compare_error() {
        let err = BenchError::compare("base document has no paths");
        assert_eq!(
            err.to_string(),
            "Comparison failed: base document has no paths"
        );
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(BenchError::NoSamples.exit_code(), 1);
        let err = BenchError::SpecRead {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
