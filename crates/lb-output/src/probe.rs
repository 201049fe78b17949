//! Where to sample a snapshot.

use std::fmt;

use lb_core::{Axis, MacroFields};

use crate::row::{Quantity, SampleRow};
use crate::{OutputError, OutputResult};

/// A point or a full row/column of the grid to sample at every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    DensityPoint { x: usize, y: usize },
    VelocityPoint { x: usize, y: usize },
    /// Density along row `y`, west to east.
    DensityRow { y: usize },
    /// Density along column `x`, south to north.
    DensityColumn { x: usize },
    VelocityRow { y: usize },
    VelocityColumn { x: usize },
}

impl Probe {
    /// `true` for single-cell probes.
    pub fn is_point(&self) -> bool {
        matches!(self, Probe::DensityPoint { .. } | Probe::VelocityPoint { .. })
    }

    /// Reject probes that fall outside an `nx × ny` grid.
    pub fn check(&self, nx: usize, ny: usize) -> OutputResult<()> {
        let inside = match *self {
            Probe::DensityPoint { x, y } | Probe::VelocityPoint { x, y } => x < nx && y < ny,
            Probe::DensityRow { y } | Probe::VelocityRow { y } => y < ny,
            Probe::DensityColumn { x } | Probe::VelocityColumn { x } => x < nx,
        };
        if inside {
            Ok(())
        } else {
            Err(OutputError::ProbeOutOfBounds { probe: self.to_string(), nx, ny })
        }
    }

    /// Sample `fields` at `step`.
    pub fn sample(&self, step: u64, fields: &MacroFields) -> OutputResult<Vec<SampleRow>> {
        let probe = self.to_string();
        let row = |x: usize, y: usize, quantity: Quantity, value: f64| SampleRow {
            step,
            probe: probe.clone(),
            x,
            y,
            quantity,
            value,
        };

        let rows = match *self {
            Probe::DensityPoint { x, y } => vec![row(x, y, Quantity::Density, fields.density_at(x, y)?)],
            Probe::VelocityPoint { x, y } => {
                let [ux, uy] = fields.velocity_at(x, y)?;
                vec![row(x, y, Quantity::VelocityX, ux), row(x, y, Quantity::VelocityY, uy)]
            }
            Probe::DensityRow { y } => fields
                .density_cut(Axis::Horizontal, y)?
                .into_iter()
                .enumerate()
                .map(|(x, rho)| row(x, y, Quantity::Density, rho))
                .collect(),
            Probe::DensityColumn { x } => fields
                .density_cut(Axis::Vertical, x)?
                .into_iter()
                .enumerate()
                .map(|(y, rho)| row(x, y, Quantity::Density, rho))
                .collect(),
            Probe::VelocityRow { y } => fields
                .velocity_cut(Axis::Horizontal, y)?
                .into_iter()
                .enumerate()
                .flat_map(|(x, [ux, uy])| [row(x, y, Quantity::VelocityX, ux), row(x, y, Quantity::VelocityY, uy)])
                .collect(),
            Probe::VelocityColumn { x } => fields
                .velocity_cut(Axis::Vertical, x)?
                .into_iter()
                .enumerate()
                .flat_map(|(y, [ux, uy])| [row(x, y, Quantity::VelocityX, ux), row(x, y, Quantity::VelocityY, uy)])
                .collect(),
        };
        Ok(rows)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probe::DensityPoint { x, y }  => write!(f, "density({x},{y})"),
            Probe::VelocityPoint { x, y } => write!(f, "velocity({x},{y})"),
            Probe::DensityRow { y }       => write!(f, "density_row(y={y})"),
            Probe::DensityColumn { x }    => write!(f, "density_column(x={x})"),
            Probe::VelocityRow { y }      => write!(f, "velocity_row(y={y})"),
            Probe::VelocityColumn { x }   => write!(f, "velocity_column(x={x})"),
        }
    }
}
