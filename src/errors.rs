//! Error types for three-space operations
//!
//! Two kinds of failure belong to the vector itself: a value that cannot be
//! used as a real number, and a division by zero. The recorder adds a third
//! for its file export.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for space functionality
#[derive(Error, Debug)]
pub enum SpaceError {
    /// A non-numeric value was supplied where a real number is required, or an
    /// operation was attempted with an unsupported operand type
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// The divisor of a division was exactly zero
    #[error("Divide by zero: {0}")]
    DivideByZero(String),

    /// Error when the recorder cannot write its export file
    #[error("Recorder I/O error on {path:?}: {source}")]
    RecorderIo {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for space operations
pub type Result<T> = std::result::Result<T, SpaceError>;

/// Helper function to convert a std::io::Error to SpaceError
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> SpaceError {
    SpaceError::RecorderIo {
        path: path.into(),
        source: err,
    }
}

/// Builds the error raised when `operation` is asked to divide by zero
pub(crate) fn divide_by_zero(operation: &str) -> SpaceError {
    SpaceError::DivideByZero(format!("{} attempted divide by zero.", operation))
}
