use lb_core::{Edge, LbError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecompError {
    #[error("invalid topology: {0}")]
    Topology(String),

    #[error("block {rank} would be {nx}x{ny} cells; every block needs at least {min} per axis")]
    BlockTooSmall {
        rank: usize,
        nx:   usize,
        ny:   usize,
        min:  usize,
    },

    #[error("partition {rank} has no halo link on its {side} side")]
    Unlinked { rank: usize, side: Edge },

    #[error("halo link on the {side} side of partition {rank} closed")]
    Disconnected { rank: usize, side: Edge },

    #[error("worker for partition {rank} panicked")]
    WorkerPanicked { rank: usize },

    #[error("an earlier run of this domain failed; rebuild it from the initial condition")]
    Aborted,

    #[error(transparent)]
    Core(#[from] LbError),
}

pub type DecompResult<T> = Result<T, DecompError>;
