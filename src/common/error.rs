//! Error types for the fib CLI
//!
//! Argument and range errors are raised before the first sequence line is
//! written, so those failures never come with partial output.

use std::io;
use thiserror::Error;

use crate::fib::MAX_INDEX;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fib CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Argument Errors ===
    #[error(
        "Missing argument N. Usage: fib <N>  (prints terms 0..=N, N between 0 and {})",
        MAX_INDEX
    )]
    MissingArgument,

    #[error("Invalid argument '{value}': expected a base-10 integer")]
    InvalidArgument { value: String },

    #[error("Negative argument {0}: N must be 0 or greater")]
    NegativeArgument(String),

    // === Computation Errors ===
    #[error(
        "Term {index} does not fit in a signed 64-bit integer (largest supported index is {max})"
    )]
    Overflow { index: String, max: u32 },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(value: &str) -> Self {
        Self::InvalidArgument {
            value: value.to_string(),
        }
    }

    /// Create a negative argument error
    pub fn negative_argument(value: impl ToString) -> Self {
        Self::NegativeArgument(value.to_string())
    }

    /// Create an overflow error for the given index
    ///
    /// The index is kept as text since it may be too large for any integer type.
    pub fn overflow(index: impl ToString) -> Self {
        Self::Overflow {
            index: index.to_string(),
            max: MAX_INDEX,
        }
    }

    /// Process exit status for this error
    ///
    /// Argument errors use 2, the same code clap exits with on bad usage.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgument
            | Error::InvalidArgument { .. }
            | Error::NegativeArgument(_) => 2,
            Error::Overflow { .. } => 3,
            Error::Io(_) => 1,
        }
    }
}
