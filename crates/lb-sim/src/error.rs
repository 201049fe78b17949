use lb_boundary::BoundaryError;
use lb_core::{LbError, Step};
use lb_decomp::DecompError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] LbError),

    #[error("boundary error: {0}")]
    Boundary(#[from] BoundaryError),

    #[error("decomposition error: {0}")]
    Decomp(#[from] DecompError),

    #[error("simulation already finished at {step}")]
    AlreadyFinished { step: Step },
}

pub type SimResult<T> = Result<T, SimError>;
