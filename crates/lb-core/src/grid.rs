//! The population grid.
//!
//! # Layout
//!
//! Cells are stored cell-major and row-major: cell `(x, y)` lives at
//! `y * nx + x` and holds its nine populations contiguously.  Collision
//! touches one cell at a time and streaming copies whole cells' channels, so
//! this keeps both passes on contiguous memory.

use itertools::iproduct;

use crate::lattice::{self, Cell, Q};
use crate::{LbError, LbResult, Window};

/// A 2D grid of D2Q9 population vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Populations {
    nx:    usize,
    ny:    usize,
    cells: Vec<Cell>,
}

impl Populations {
    /// A grid of all-zero populations.
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self { nx, ny, cells: vec![[0.0; Q]; nx * ny] }
    }

    /// Every cell set to `equilibrium(density, velocity)`.
    pub fn uniform(nx: usize, ny: usize, density: f64, velocity: [f64; 2]) -> Self {
        let cell = lattice::equilibrium(density, velocity);
        Self { nx, ny, cells: vec![cell; nx * ny] }
    }

    /// Each cell set to the equilibrium of the `(density, velocity)` returned
    /// by `field(x, y)`.
    pub fn from_equilibrium<F>(nx: usize, ny: usize, mut field: F) -> Self
    where
        F: FnMut(usize, usize) -> (f64, [f64; 2]),
    {
        let cells = iproduct!(0..ny, 0..nx)
            .map(|(y, x)| {
                let (rho, u) = field(x, y);
                lattice::equilibrium(rho, u)
            })
            .collect();
        Self { nx, ny, cells }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// The whole grid as a window.
    #[inline]
    pub fn window(&self) -> Window {
        Window::new(0, 0, self.nx, self.ny)
    }

    /// Flat cell index for `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.nx && y < self.ny);
        y * self.nx + x
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, x: usize, y: usize) -> LbResult<&Cell> {
        self.check(x, y)?;
        Ok(self.cell(x, y))
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Density and velocity at `(x, y)`.
    #[inline]
    pub fn moments(&self, x: usize, y: usize) -> (f64, [f64; 2]) {
        lattice::moments(self.cell(x, y))
    }

    /// Sum of all populations in the grid.
    pub fn total_mass(&self) -> f64 {
        self.cells.iter().map(lattice::density).sum()
    }

    /// Sum of all populations inside `window`.
    pub fn window_mass(&self, window: &Window) -> f64 {
        iproduct!(window.y0..window.y1(), window.x0..window.x1())
            .map(|(y, x)| lattice::density(self.cell(x, y)))
            .sum()
    }

    /// `true` if no population is `NaN` or infinite.
    pub fn is_finite(&self) -> bool {
        self.cells.iter().flatten().all(|f| f.is_finite())
    }

    /// The smallest population value anywhere in the grid.
    pub fn min_population(&self) -> f64 {
        self.cells.iter().flatten().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest absolute per-population difference to `other`.
    pub fn max_abs_diff(&self, other: &Populations) -> LbResult<f64> {
        if (self.nx, self.ny) != (other.nx, other.ny) {
            return Err(LbError::ShapeMismatch {
                expected: (self.nx, self.ny),
                got:      (other.nx, other.ny),
            });
        }
        Ok(self
            .cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }

    // ── Layers (halo exchange) ────────────────────────────────────────────

    /// Copy of column `x`, bottom to top.
    pub fn column(&self, x: usize) -> Vec<Cell> {
        (0..self.ny).map(|y| *self.cell(x, y)).collect()
    }

    /// Copy of row `y`, west to east.
    pub fn row(&self, y: usize) -> Vec<Cell> {
        self.cells[y * self.nx..(y + 1) * self.nx].to_vec()
    }

    /// Overwrite column `x` with `layer`.
    pub fn set_column(&mut self, x: usize, layer: &[Cell]) -> LbResult<()> {
        if layer.len() != self.ny {
            return Err(LbError::LayerLength { expected: self.ny, got: layer.len() });
        }
        for (y, cell) in layer.iter().enumerate() {
            *self.cell_mut(x, y) = *cell;
        }
        Ok(())
    }

    /// Overwrite row `y` with `layer`.
    pub fn set_row(&mut self, y: usize, layer: &[Cell]) -> LbResult<()> {
        if layer.len() != self.nx {
            return Err(LbError::LayerLength { expected: self.nx, got: layer.len() });
        }
        self.cells[y * self.nx..(y + 1) * self.nx].copy_from_slice(layer);
        Ok(())
    }

    // ── Sub-grids (scatter / gather) ──────────────────────────────────────

    /// Copy `window` of `self` into a new grid, extended by `pad` cells on
    /// every side.  Padding cells are read with periodic wrap-around.
    pub fn extract_padded(&self, window: &Window, pad: usize) -> Populations {
        let (nx, ny) = (window.nx + 2 * pad, window.ny + 2 * pad);
        let mut cells = Vec::with_capacity(nx * ny);
        for (j, i) in iproduct!(0..ny, 0..nx) {
            let gx = wrap(window.x0 as i64 + i as i64 - pad as i64, self.nx);
            let gy = wrap(window.y0 as i64 + j as i64 - pad as i64, self.ny);
            cells.push(*self.cell(gx, gy));
        }
        Populations { nx, ny, cells }
    }

    /// Paste `source`'s `from` window into `self` with its lower-left corner
    /// at `(x0, y0)`.
    pub fn paste(&mut self, source: &Populations, from: &Window, x0: usize, y0: usize) -> LbResult<()> {
        if x0 + from.nx > self.nx || y0 + from.ny > self.ny {
            return Err(LbError::OutOfBounds {
                x:  x0 + from.nx - 1,
                y:  y0 + from.ny - 1,
                nx: self.nx,
                ny: self.ny,
            });
        }
        for (j, i) in iproduct!(0..from.ny, 0..from.nx) {
            *self.cell_mut(x0 + i, y0 + j) = *source.cell(from.x0 + i, from.y0 + j);
        }
        Ok(())
    }

    fn check(&self, x: usize, y: usize) -> LbResult<()> {
        if x >= self.nx || y >= self.ny {
            return Err(LbError::OutOfBounds { x, y, nx: self.nx, ny: self.ny });
        }
        Ok(())
    }
}

/// `v` wrapped into `0..n`.
#[inline]
pub fn wrap(v: i64, n: usize) -> usize {
    v.rem_euclid(n as i64) as usize
}
