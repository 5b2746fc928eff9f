use crate::arith::Operation;
use clap::Parser;

/// Command-line arguments for calc
#[derive(Parser, Debug, Clone)]
#[command(name = "calc")]
#[command(about = "A CLI calculator for basic arithmetic operations")]
#[command(long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(after_help = "\
Examples:
  calc 5 3 add     # Addition: 5.0 + 3.0 = 8.0
  calc 10 2 div    # Division: 10.0 / 2.0 = 5.0
  calc 7 4 sub     # Subtraction: 7.0 - 4.0 = 3.0
  calc 3 6 mul     # Multiplication: 3.0 * 6.0 = 18.0")]
pub struct Args {
    /// First number
    #[arg(value_name = "A")]
    pub a: f64,

    /// Second number
    #[arg(value_name = "B")]
    pub b: f64,

    /// Operation to perform
    #[arg(value_name = "OP")]
    pub op: Operation,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
