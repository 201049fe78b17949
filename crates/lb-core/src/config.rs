//! Run configuration.

use crate::{LbError, LbResult, Step};

/// Smallest accepted grid extent along either axis.
pub const MIN_EXTENT: usize = 10;

/// Top-level solver configuration.
///
/// Typically built by the application and handed to `lb_sim::SimBuilder`,
/// which calls [`validate`][Self::validate] before allocating anything.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LbConfig {
    /// Grid length: number of cells along x.
    pub nx: usize,

    /// Grid height: number of cells along y.
    pub ny: usize,

    /// Number of steps to run.
    pub steps: u64,

    /// BGK relaxation parameter, `0 < omega < 2`.  Sets the viscosity via
    /// [`kinematic_viscosity`][crate::lattice::kinematic_viscosity].
    pub omega: f64,

    /// Emit a field snapshot every N steps (and at step 0).  0 disables
    /// snapshots.
    pub output_interval_steps: u64,
}

impl LbConfig {
    /// A configuration with snapshots disabled.
    pub fn new(nx: usize, ny: usize, steps: u64, omega: f64) -> Self {
        Self { nx, ny, steps, omega, output_interval_steps: 0 }
    }

    /// The step at which the run ends.
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.steps)
    }

    /// Reject grids below [`MIN_EXTENT`], a zero step count and `omega`
    /// outside the open interval `(0, 2)`.
    pub fn validate(&self) -> LbResult<()> {
        if self.nx < MIN_EXTENT || self.ny < MIN_EXTENT {
            return Err(LbError::Config(format!(
                "grid {}x{} is smaller than the minimum {MIN_EXTENT}x{MIN_EXTENT}",
                self.nx, self.ny
            )));
        }
        if self.steps == 0 {
            return Err(LbError::Config("step count must be positive".into()));
        }
        if !(self.omega > 0.0 && self.omega < 2.0) {
            return Err(LbError::Config(format!(
                "omega {} is outside the open interval (0, 2)",
                self.omega
            )));
        }
        Ok(())
    }
}
