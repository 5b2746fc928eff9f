//! Equation output formatting
//!
//! Renders `"{a} {symbol} {b} = {result}"`. Integral floats keep a trailing
//! `.0` (`5` prints as `5.0`) so the output reads as floating-point
//! arithmetic; everything else uses Rust's shortest exact rendering.

use crate::arith::Operation;

/// Format a single operand or result
///
/// `5.0` -> `"5.0"`, `0.25` -> `"0.25"`, `1.0 / 3.0` ->
/// `"0.3333333333333333"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    // f64 loses integer precision past 2^53; beyond that the `.0` form would
    // fabricate digits, so fall through to the default rendering
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Format the full equation line printed to stdout
#[must_use]
pub fn format_equation(a: f64, op: Operation, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_number(a),
        op.symbol(),
        format_number(b),
        format_number(result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_decimal_point() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(2e15), "2000000000000000.0");
    }

    #[test]
    fn test_fractional_values_unchanged() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_equation_line() {
        assert_eq!(
            format_equation(5.0, Operation::Add, 3.0, 8.0),
            "5.0 + 3.0 = 8.0"
        );
        assert_eq!(
            format_equation(10.0, Operation::Div, 2.0, 5.0),
            "10.0 / 2.0 = 5.0"
        );
        assert_eq!(
            format_equation(7.5, Operation::Sub, 0.25, 7.25),
            "7.5 - 0.25 = 7.25"
        );
    }
}
