//! Halo transport: how a partition's boundary layers reach its neighbours.
//!
//! A partition only ever talks to its neighbours by side: it sends the layer
//! just inside its `side` edge and receives the neighbour's layer into the
//! ghost cells on that side.  [`HaloTransport`] is that contract;
//! [`ChannelTransport`] implements it for partitions running on threads of
//! one process.

use crossbeam_channel::{Receiver, Sender, bounded};
use lb_core::{Cell, Edge};

use crate::{DecompError, DecompResult, Topology};

/// One layer of cells, all nine populations each.
pub type Layer = Vec<Cell>;

/// Send/receive by neighbour side.
pub trait HaloTransport {
    /// Send `layer` to the neighbour across `side`.
    fn send(&mut self, side: Edge, layer: Layer) -> DecompResult<()>;

    /// Block until the neighbour across `side` has sent its layer.
    fn recv(&mut self, side: Edge) -> DecompResult<Layer>;
}

// ── ChannelTransport ──────────────────────────────────────────────────────────

/// In-process transport over bounded channels, one per directed link.
///
/// Each link holds at most one layer.  A partition sends on every linked
/// side of a phase before receiving on any, so a full round never blocks on
/// a send.
#[derive(Debug)]
pub struct ChannelTransport {
    rank:     usize,
    outgoing: [Option<Sender<Layer>>; 4],
    incoming: [Option<Receiver<Layer>>; 4],
}

impl ChannelTransport {
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// `true` if a link exists across `side`.
    pub fn is_linked(&self, side: Edge) -> bool {
        self.incoming[slot(side)].is_some()
    }
}

impl HaloTransport for ChannelTransport {
    fn send(&mut self, side: Edge, layer: Layer) -> DecompResult<()> {
        let rank = self.rank;
        let tx = self.outgoing[slot(side)]
            .as_ref()
            .ok_or(DecompError::Unlinked { rank, side })?;
        tx.send(layer).map_err(|_| DecompError::Disconnected { rank, side })
    }

    fn recv(&mut self, side: Edge) -> DecompResult<Layer> {
        let rank = self.rank;
        let rx = self.incoming[slot(side)]
            .as_ref()
            .ok_or(DecompError::Unlinked { rank, side })?;
        rx.recv().map_err(|_| DecompError::Disconnected { rank, side })
    }
}

/// Wire up one transport per rank of `topology`, ordered by rank.
///
/// For every rank `r` and side `s` with a neighbour `n`, a channel carries
/// what `n` sends across `s.opposite()` into `r`'s ghost cells on `s`.  A
/// periodic axis only one block wide links a rank to itself.
pub fn mesh(topology: &Topology, periodic_x: bool, periodic_y: bool) -> Vec<ChannelTransport> {
    let mut transports: Vec<ChannelTransport> = (0..topology.units())
        .map(|rank| ChannelTransport {
            rank,
            outgoing: Default::default(),
            incoming: Default::default(),
        })
        .collect();

    for rank in 0..topology.units() {
        for side in Edge::ALL {
            if let Some(n) = topology.neighbour(rank, side, periodic_x, periodic_y) {
                let (tx, rx) = bounded(1);
                transports[rank].incoming[slot(side)] = Some(rx);
                transports[n].outgoing[slot(side.opposite())] = Some(tx);
            }
        }
    }
    transports
}

#[inline]
fn slot(side: Edge) -> usize {
    match side {
        Edge::North => 0,
        Edge::South => 1,
        Edge::East  => 2,
        Edge::West  => 3,
    }
}
