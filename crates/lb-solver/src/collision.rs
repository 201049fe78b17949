//! BGK collision operator.
//!
//! Every cell relaxes toward the equilibrium of its own density and velocity:
//!
//! ```text
//! f_i ← f_i + omega (feq_i(rho, u) - f_i)
//! ```
//!
//! No cell reads another, so the pass is split into disjoint rows when the
//! `parallel` feature is on.  `omega` is trusted to lie in `(0, 2)`; the
//! configuration layer validates it.

use itertools::izip;

use lb_core::lattice::{self, Cell};
use lb_core::{Populations, Window};

/// Relax one cell in place.
#[inline]
pub fn collide_cell(f: &mut Cell, omega: f64) {
    let (rho, u) = lattice::moments(f);
    let feq = lattice::equilibrium(rho, u);
    for (f, f_eq) in izip!(f.iter_mut(), feq) {
        *f += omega * (f_eq - *f);
    }
}

/// Relax every cell of the grid.
pub fn collide(f: &mut Populations, omega: f64) {
    let window = f.window();
    collide_window(f, &window, omega);
}

/// Relax the cells inside `window` and leave the rest untouched.
pub fn collide_window(f: &mut Populations, window: &Window, omega: f64) {
    let nx = f.nx();
    let (x0, x1) = (window.x0, window.x1());
    let rows = &mut f.cells_mut()[window.y0 * nx..window.y1() * nx];

    #[cfg(not(feature = "parallel"))]
    {
        for row in rows.chunks_mut(nx) {
            for cell in &mut row[x0..x1] {
                collide_cell(cell, omega);
            }
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        rows.par_chunks_mut(nx).for_each(|row| {
            for cell in &mut row[x0..x1] {
                collide_cell(cell, omega);
            }
        });
    }
}
