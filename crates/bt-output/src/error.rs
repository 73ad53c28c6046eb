//! Error types for bt-output.

use thiserror::Error;

/// Errors that can occur when materializing or writing a path.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("path is broken at step {step}: no legal crossing links it to the previous state")]
    BrokenPath { step: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
