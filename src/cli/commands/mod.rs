//! Command implementations, one per benchmark mode.

pub mod advanced;
pub mod full;
pub mod simple;

use crate::error::{BenchError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the report destination: the `--output` file when given, stdout
/// otherwise.
///
/// # Errors
///
/// Returns an error when the output file cannot be created; that failure
/// is fatal before any measurement starts.
pub fn open_report_writer(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| BenchError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_report_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut writer = open_report_writer(Some(&path)).unwrap();
        writer.write_all(b"hello").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_open_report_writer_fails_on_missing_directory() {
        let err = match open_report_writer(Some(Path::new("no/such/dir/report.txt"))) {
            Ok(_) => panic!("expected open_report_writer to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, BenchError::OutputCreate { .. }));
    }
}
