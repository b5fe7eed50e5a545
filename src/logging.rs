//! Logging initialization.
//!
//! Logs go to stderr so reports on stdout (or the `--output` file) stay
//! machine-consumable. `RUST_LOG` overrides the flag-derived level.

use crate::error::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity: default `warn`, `-v` raises to `info`, `-vv` to `debug`;
/// `--quiet` drops to errors only.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("oasbench={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logging subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_idempotent_failure_is_reported() {
        // First call in the test process may succeed or fail depending on
        // ordering; the second call must fail cleanly rather than panic.
        let _ = init_logging(0, false);
        assert!(init_logging(2, false).is_err());
    }
}
