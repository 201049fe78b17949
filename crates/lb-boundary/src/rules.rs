//! The per-edge update rules.
//!
//! Walls sit half a cell beyond the outermost fluid cells.  A population that
//! left the window through a wall during streaming is read back from the
//! post-collision snapshot and returned, reversed, to the cell it left.

use lb_core::lattice::{self, CS2, OPPOSITE, W};
use lb_core::{Edge, Populations, Window};

/// Directions whose lattice vector points out through `edge`.
#[inline]
pub fn leaving(edge: Edge) -> [usize; 3] {
    match edge {
        Edge::North => [2, 5, 6],
        Edge::South => [4, 7, 8],
        Edge::East  => [1, 5, 8],
        Edge::West  => [3, 6, 7],
    }
}

/// Bounce-back off a wall moving at `wall_velocity` (zero for a stationary
/// wall):
///
/// ```text
/// f_opp(i)(x) = f*_i(x) - 2 w_i rho_w (c_i . u_w) / cs^2
/// ```
///
/// `rho_w` is the post-collision density of the edge cell.
pub fn bounce_back(
    f:             &mut Populations,
    f_post:        &Populations,
    window:        &Window,
    edge:          Edge,
    wall_velocity: [f64; 2],
) {
    let dirs = leaving(edge);

    for (x, y) in window.edge_cells(edge) {
        let post = f_post.cell(x, y);
        let rho_w = lattice::density(post);
        let cell = f.cell_mut(x, y);
        for i in dirs {
            let correction = 2.0 * W[i] * rho_w * lattice::c_dot(i, wall_velocity) / CS2;
            cell[OPPOSITE[i]] = post[i] - correction;
        }
    }
}

/// Reset every cell on `edge` to `feq(density, u_inner)`, with `u_inner` the
/// velocity of the neighbouring cell one step into the window.
pub fn pressure(f: &mut Populations, window: &Window, edge: Edge, density: f64) {
    for (x, y) in window.edge_cells(edge) {
        let (ix, iy) = window.inward(edge, x, y);
        let (_, u) = f.moments(ix, iy);
        *f.cell_mut(x, y) = lattice::equilibrium(density, u);
    }
}
