//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for calc operations
///
/// Malformed arguments never reach this layer; clap rejects them with its
/// own exit code (2) before dispatch. Division by zero is not an error
/// either, so the runtime taxonomy is small.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CalcError {
    /// Output Error - writing the result line to stdout failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl CalcError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Output { .. } => 1,
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
