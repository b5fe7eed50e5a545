use clap::Parser;
use oasbench::BenchError;
use oasbench::cli::{Cli, Mode, commands};
use oasbench::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {e}");
        // Don't exit, just continue without logging or with basic stderr
    }

    let result = match cli.mode {
        Mode::Simple => commands::simple::execute(&cli),
        Mode::Advanced => commands::advanced::execute(&cli),
        Mode::Full => commands::full::execute(&cli),
    };

    if let Err(e) = result {
        handle_error(&e);
    }
}

/// Log the fatal error and terminate with its exit code.
fn handle_error(err: &BenchError) -> ! {
    tracing::error!(error = %err, "benchmark aborted");
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}
