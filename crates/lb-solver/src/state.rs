//! Double-buffered lattice state.

use lb_core::{Populations, Window};

use crate::{collision, streaming};

/// The population grid plus the buffer streaming writes into.
///
/// After [`stream`][Self::stream] the second buffer holds the post-collision
/// populations of the step just taken.  Boundary conditions read it to
/// recover what left the domain through an edge.
#[derive(Clone, Debug)]
pub struct LatticeState {
    f:      Populations,
    f_post: Populations,
}

impl LatticeState {
    pub fn new(initial: Populations) -> Self {
        Self { f_post: initial.clone(), f: initial }
    }

    /// Current populations.
    #[inline]
    pub fn populations(&self) -> &Populations {
        &self.f
    }

    #[inline]
    pub fn populations_mut(&mut self) -> &mut Populations {
        &mut self.f
    }

    /// Post-collision populations of the last step, valid after `stream`.
    #[inline]
    pub fn post_collision(&self) -> &Populations {
        &self.f_post
    }

    /// Current populations (mutable) next to the post-collision snapshot,
    /// for the boundary pass.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut Populations, &Populations) {
        (&mut self.f, &self.f_post)
    }

    pub fn collide(&mut self, omega: f64) {
        collision::collide(&mut self.f, omega);
    }

    pub fn collide_window(&mut self, window: &Window, omega: f64) {
        collision::collide_window(&mut self.f, window, omega);
    }

    /// Stream the current populations; the pre-stream buffer is kept as the
    /// post-collision snapshot.
    pub fn stream(&mut self) {
        streaming::stream(&self.f, &mut self.f_post);
        std::mem::swap(&mut self.f, &mut self.f_post);
    }

    pub fn into_populations(self) -> Populations {
        self.f
    }
}
