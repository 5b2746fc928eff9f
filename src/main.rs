//! # calc
//!
//! `calc` is a command-line calculator for basic arithmetic on
//! double-precision floats: addition, subtraction, multiplication and
//! division.
//!
//! ## Usage
//!
//! ```sh
//! calc 5 3 add     # 5.0 + 3.0 = 8.0
//! calc 10 2 div    # 10.0 / 2.0 = 5.0
//! ```
//!
//! See `calc --help` for the full argument reference.

use anyhow::Result;
use calc::cli::Args;
use calc::error::CalcError;
use clap::Parser as _;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag. Diagnostics go to
    // stderr so stdout carries only the result line.
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Report cancellation on Ctrl-C instead of dying silently
    ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled.");
        std::process::exit(1);
    })?;

    match calc::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.downcast_ref::<CalcError>().map_or(1, CalcError::exit_code));
        }
    }
}
