//! Arithmetic primitives over double-precision floats
//!
//! Four pure functions, each total over finite doubles. None of them signal:
//! see [`divide`] for the division-by-zero policy.

/// Add two numbers
#[must_use]
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract the second number from the first
#[must_use]
#[inline]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
#[must_use]
#[inline]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide the first number by the second
///
/// Division by zero returns `0.0` rather than infinity, NaN, or an error.
/// This is a deliberate non-signaling policy and callers depend on it; do
/// not replace it with IEEE propagation.
#[must_use]
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    a / b
}
