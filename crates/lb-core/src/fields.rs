//! Macroscopic fields derived from a population grid.

use crate::lattice;
use crate::{LbError, LbResult, Populations};

/// Which way a 1D cut runs through the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// A row at fixed `y`, running west to east.
    Horizontal,
    /// A column at fixed `x`, running south to north.
    Vertical,
}

/// Density and velocity of every cell at one instant.
///
/// Recomputed from the populations whenever a snapshot is requested; never
/// fed back into the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroFields {
    nx:       usize,
    ny:       usize,
    density:  Vec<f64>,
    velocity: Vec<[f64; 2]>,
}

impl MacroFields {
    pub fn from_populations(f: &Populations) -> Self {
        let (density, velocity) = f.cells().iter().map(lattice::moments).unzip();
        Self { nx: f.nx(), ny: f.ny(), density, velocity }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Row-major density field.
    #[inline]
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Row-major velocity field.
    #[inline]
    pub fn velocity(&self) -> &[[f64; 2]] {
        &self.velocity
    }

    pub fn density_at(&self, x: usize, y: usize) -> LbResult<f64> {
        Ok(self.density[self.index(x, y)?])
    }

    pub fn velocity_at(&self, x: usize, y: usize) -> LbResult<[f64; 2]> {
        Ok(self.velocity[self.index(x, y)?])
    }

    /// Velocity magnitude at `(x, y)`.
    pub fn speed_at(&self, x: usize, y: usize) -> LbResult<f64> {
        let [ux, uy] = self.velocity_at(x, y)?;
        Ok((ux * ux + uy * uy).sqrt())
    }

    /// Density along the cut through `index`.
    pub fn density_cut(&self, axis: Axis, index: usize) -> LbResult<Vec<f64>> {
        Ok(self.cut_indices(axis, index)?.map(|i| self.density[i]).collect())
    }

    /// Velocity along the cut through `index`.
    pub fn velocity_cut(&self, axis: Axis, index: usize) -> LbResult<Vec<[f64; 2]>> {
        Ok(self.cut_indices(axis, index)?.map(|i| self.velocity[i]).collect())
    }

    /// Sum of density over the grid.
    pub fn total_mass(&self) -> f64 {
        self.density.iter().sum()
    }

    /// Largest velocity magnitude in the grid.
    pub fn max_speed(&self) -> f64 {
        self.velocity
            .iter()
            .map(|[ux, uy]| (ux * ux + uy * uy).sqrt())
            .fold(0.0, f64::max)
    }

    fn index(&self, x: usize, y: usize) -> LbResult<usize> {
        if x >= self.nx || y >= self.ny {
            return Err(LbError::OutOfBounds { x, y, nx: self.nx, ny: self.ny });
        }
        Ok(y * self.nx + x)
    }

    fn cut_indices(&self, axis: Axis, index: usize) -> LbResult<Box<dyn Iterator<Item = usize>>> {
        let nx = self.nx;
        match axis {
            Axis::Horizontal => {
                self.index(0, index)?;
                Ok(Box::new((0..nx).map(move |x| index * nx + x)))
            }
            Axis::Vertical => {
                self.index(index, 0)?;
                Ok(Box::new((0..self.ny).map(move |y| y * nx + index)))
            }
        }
    }
}
