//! Periodic streaming.
//!
//! Each destination cell pulls channel `i` from the cell one lattice vector
//! upstream, `(x - c_ix, y - c_iy)`, wrapping at the grid edges.  Source and
//! destination are distinct buffers, so every channel is shifted from the
//! same pre-stream snapshot regardless of iteration order.

use lb_core::grid::wrap;
use lb_core::lattice::{C, Cell, Q};
use lb_core::Populations;

/// Stream `src` into `dst`.  Both grids must have the same shape.
pub fn stream(src: &Populations, dst: &mut Populations) {
    debug_assert_eq!((src.nx(), src.ny()), (dst.nx(), dst.ny()));
    let nx = src.nx();

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in dst.cells_mut().chunks_mut(nx).enumerate() {
            stream_row(src, y, row);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        dst.cells_mut()
            .par_chunks_mut(nx)
            .enumerate()
            .for_each(|(y, row)| stream_row(src, y, row));
    }
}

/// Fill destination row `y`.
fn stream_row(src: &Populations, y: usize, row: &mut [Cell]) {
    let (nx, ny) = (src.nx(), src.ny());

    // Upstream row per direction is constant along the row.
    let mut from_y = [0usize; Q];
    for (i, c) in C.iter().enumerate() {
        from_y[i] = wrap(y as i64 - c[1] as i64, ny);
    }

    for (x, cell) in row.iter_mut().enumerate() {
        for (i, c) in C.iter().enumerate() {
            let from_x = wrap(x as i64 - c[0] as i64, nx);
            cell[i] = src.cell(from_x, from_y[i])[i];
        }
    }
}
