//! One partition: an owned block plus a one-cell ghost ring.

use lb_boundary::BoundarySet;
use lb_core::{Edge, EdgeMask, Populations, Window};
use lb_solver::LatticeState;
use tracing::trace;

use crate::halo::{HaloTransport, Layer};
use crate::{Block, DecompResult};

/// The padded population buffer of one block.
///
/// The buffer is `(nx + 2) × (ny + 2)`; the owned cells are the interior
/// window at `(1, 1)`.  Ghost cells on a linked side mirror the neighbour's
/// outermost owned cells and are refreshed by [`exchange`][Self::exchange]
/// after every step.  Ghost cells on an unlinked side are never read by an
/// owned cell's final value.
#[derive(Clone, Debug)]
pub struct Partition {
    block:    Block,
    state:    LatticeState,
    interior: Window,
    /// Interior plus every linked ghost side.
    active:   Window,
    /// Sides with a halo link.
    links:    EdgeMask,
    /// Sides on the global domain edge; boundary rules apply here.
    global:   EdgeMask,
}

impl Partition {
    /// Cut `block` out of the global initial condition, ghost ring included.
    pub fn new(initial: &Populations, block: Block, links: EdgeMask, global: EdgeMask) -> Self {
        let padded = initial.extract_padded(&block.window, 1);
        let (nx, ny) = (block.window.nx, block.window.ny);

        let lo = |side| usize::from(!links.contains(side));
        let hi = |side| usize::from(links.contains(side));
        let (x0, y0) = (lo(Edge::West), lo(Edge::South));
        let active = Window::new(x0, y0, nx + 1 + hi(Edge::East) - x0, ny + 1 + hi(Edge::North) - y0);

        Self {
            block,
            state: LatticeState::new(padded),
            interior: Window::new(1, 1, nx, ny),
            active,
            links,
            global,
        }
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.block.rank
    }

    #[inline]
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Owned cells, in padded-buffer coordinates.
    #[inline]
    pub fn interior(&self) -> &Window {
        &self.interior
    }

    /// The cells collided each step, in padded-buffer coordinates.
    #[inline]
    pub fn active(&self) -> &Window {
        &self.active
    }

    #[inline]
    pub fn links(&self) -> EdgeMask {
        self.links
    }

    #[inline]
    pub fn global_edges(&self) -> EdgeMask {
        self.global
    }

    /// The padded buffer.
    #[inline]
    pub fn populations(&self) -> &Populations {
        self.state.populations()
    }

    /// One full step: collide, stream, apply global-edge boundaries, then
    /// refresh the ghost ring.
    pub fn step<T: HaloTransport>(
        &mut self,
        omega:      f64,
        boundaries: &BoundarySet,
        transport:  &mut T,
    ) -> DecompResult<()> {
        self.state.collide_window(&self.active, omega);
        self.state.stream();
        let (f, f_post) = self.state.split_mut();
        boundaries.apply(f, f_post, &self.interior, self.global);
        self.exchange(transport)
    }

    /// Swap boundary layers with every linked neighbour.
    ///
    /// East/west columns go first.  North/south rows are then sent across
    /// the full padded width, so they carry the freshly received east/west
    /// ghosts and fill the diagonal corner ghosts.
    pub fn exchange<T: HaloTransport>(&mut self, transport: &mut T) -> DecompResult<()> {
        for (phase, sides) in [("east-west", [Edge::East, Edge::West]), ("north-south", [Edge::North, Edge::South])] {
            for side in sides {
                if self.links.contains(side) {
                    transport.send(side, self.outgoing(side))?;
                }
            }
            for side in sides {
                if self.links.contains(side) {
                    let layer = transport.recv(side)?;
                    self.write_ghost(side, &layer)?;
                }
            }
            trace!(rank = self.block.rank, phase, "halo exchanged");
        }
        Ok(())
    }

    /// The owned layer just inside `side`, full padded length.
    fn outgoing(&self, side: Edge) -> Layer {
        let f = self.state.populations();
        match side {
            Edge::East  => f.column(self.interior.x1() - 1),
            Edge::West  => f.column(self.interior.x0),
            Edge::North => f.row(self.interior.y1() - 1),
            Edge::South => f.row(self.interior.y0),
        }
    }

    fn write_ghost(&mut self, side: Edge, layer: &[lb_core::Cell]) -> DecompResult<()> {
        let (x1, y1) = (self.interior.x1(), self.interior.y1());
        let f = self.state.populations_mut();
        match side {
            Edge::East  => f.set_column(x1, layer)?,
            Edge::West  => f.set_column(0, layer)?,
            Edge::North => f.set_row(y1, layer)?,
            Edge::South => f.set_row(0, layer)?,
        }
        Ok(())
    }
}
