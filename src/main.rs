use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use receipt_tally::cli::{handle_tally, TallyArgs};

fn main() -> ExitCode {
    let args = TallyArgs::parse();
    init_logger(args.log_level);
    debug!("Log level set to {}", args.log_level.to_string().to_lowercase());

    match main_inner(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so it shows even with logging turned off
            eprintln!("Error: {e:#}");
            debug!("Exiting with error");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: &TallyArgs) -> Result<()> {
    debug!("{args:?}");
    handle_tally(args)?;
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate logs, at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
