//! Error types for lb-output.

use lb_core::LbError;
use thiserror::Error;

/// Errors that can occur when sampling or writing simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("probe {probe} lies outside the {nx}x{ny} grid")]
    ProbeOutOfBounds { probe: String, nx: usize, ny: usize },

    #[error(transparent)]
    Core(#[from] LbError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
