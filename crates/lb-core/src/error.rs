//! Solver error type.
//!
//! Sub-crates define their own error enums and wrap `LbError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The base error type for `lb-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum LbError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cell ({x}, {y}) is outside the {nx}x{ny} grid")]
    OutOfBounds {
        x:  usize,
        y:  usize,
        nx: usize,
        ny: usize,
    },

    #[error("grid shape {got:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got:      (usize, usize),
    },

    #[error("layer has {got} cells, expected {expected}")]
    LayerLength { expected: usize, got: usize },
}

/// Shorthand result type for all `lb-*` crates.
pub type LbResult<T> = Result<T, LbError>;
