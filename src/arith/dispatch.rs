//! Operation selector mapping CLI tokens to arithmetic primitives

use crate::arith::ops;
use clap::ValueEnum;

/// The four supported arithmetic operations
///
/// Parsed from the CLI tokens `add`, `sub`, `mul`, `div`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[non_exhaustive]
pub enum Operation {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division
    Div,
}

impl Operation {
    /// Apply this operation to the given operands
    #[must_use]
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => ops::add(a, b),
            Self::Sub => ops::sub(a, b),
            Self::Mul => ops::mul(a, b),
            Self::Div => ops::divide(a, b),
        }
    }

    /// The symbol used when printing the equation
    #[must_use]
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_to_primitives() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Sub.apply(7.0, 4.0), 3.0);
        assert_eq!(Operation::Mul.apply(3.0, 6.0), 18.0);
        assert_eq!(Operation::Div.apply(10.0, 2.0), 5.0);
    }

    #[test]
    fn test_apply_div_by_zero_policy() {
        assert_eq!(Operation::Div.apply(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Sub.symbol(), "-");
        assert_eq!(Operation::Mul.symbol(), "*");
        assert_eq!(Operation::Div.symbol(), "/");
    }

    #[test]
    fn test_tokens_parse_to_variants() {
        assert_eq!(Operation::from_str("add", false), Ok(Operation::Add));
        assert_eq!(Operation::from_str("sub", false), Ok(Operation::Sub));
        assert_eq!(Operation::from_str("mul", false), Ok(Operation::Mul));
        assert_eq!(Operation::from_str("div", false), Ok(Operation::Div));
        assert!(Operation::from_str("pow", false).is_err());
    }
}
