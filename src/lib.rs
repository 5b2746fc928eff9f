//! `calc` - A CLI calculator for basic arithmetic operations
//!
//! This library provides four arithmetic primitives over double-precision
//! floats (add, sub, mul, divide), an operation dispatch layer mapping CLI
//! tokens to those primitives, and the formatting used to print the result
//! as an equation.

pub mod arith;
pub mod cli;
pub mod error;
pub mod utils;

use anyhow::Result;
use cli::Args;
use error::CalcError;
use std::io::Write as _;
use tracing::debug;
use utils::format::format_equation;

/// Main entry point for the calc library
///
/// Computes `a <op> b`, prints the formatted equation to stdout and flushes
/// it so the line is visible even when the process exits immediately after.
///
/// # Errors
///
/// Returns an error if the result line cannot be written or flushed.
pub fn run(args: &Args) -> Result<()> {
    debug!("computing {} {} {}", args.a, args.op.symbol(), args.b);

    let result = args.op.apply(args.a, args.b);
    let line = format_equation(args.a, args.op, args.b, result);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")
        .and_then(|()| stdout.flush())
        .map_err(|e| CalcError::output(e.to_string()))?;

    Ok(())
}
