//! Boundary configuration errors.

use thiserror::Error;

use lb_core::Edge;

/// Errors produced by `lb-boundary` when validating a [`BoundarySet`][crate::BoundarySet].
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("{edge} edge is periodic but the {} edge is not", edge.opposite())]
    UnpairedPeriodic { edge: Edge },

    #[error("{edge} wall velocity {velocity:?} has a component normal to the wall")]
    NormalWallVelocity { edge: Edge, velocity: [f64; 2] },

    #[error("{edge} wall velocity {velocity:?} is not finite")]
    NonFiniteWallVelocity { edge: Edge, velocity: [f64; 2] },

    #[error("{edge} pressure edge density {density} must be positive and finite")]
    InvalidDensity { edge: Edge, density: f64 },
}

pub type BoundaryResult<T> = Result<T, BoundaryError>;
