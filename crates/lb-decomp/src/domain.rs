//! `PartitionedDomain` — the global grid split across concurrently stepped
//! partitions.

use std::thread;

use lb_boundary::BoundarySet;
use lb_core::{Edge, EdgeMask, MacroFields, Populations};
use tracing::{debug, info};

use crate::halo::{self, ChannelTransport};
use crate::{DecompError, DecompResult, Partition, Topology};

/// A global grid decomposed into [`Partition`]s.
///
/// Each call to [`advance`][Self::advance] runs every partition on its own
/// scoped thread for the requested number of steps.  Partitions rendezvous
/// only through their halo links, so a partition cannot start collision for
/// step `n + 1` until every neighbour has delivered its layers for step `n`.
/// Joining the threads is the barrier at the end of a batch.
///
/// A failure in any partition is fatal to the run: the failing worker drops
/// its links, every neighbour waiting on it fails with
/// [`DecompError::Disconnected`], and the domain refuses further steps.
#[derive(Debug)]
pub struct PartitionedDomain {
    nx:         usize,
    ny:         usize,
    topology:   Topology,
    boundaries: BoundarySet,
    partitions: Vec<Partition>,
    transports: Vec<ChannelTransport>,
}

impl PartitionedDomain {
    /// Scatter `initial` over `topology`.  Global edges use `boundaries`;
    /// periodic global edges are linked to the block on the far side.
    pub fn new(initial: &Populations, topology: Topology, boundaries: BoundarySet) -> DecompResult<Self> {
        let (nx, ny) = (initial.nx(), initial.ny());
        let blocks = topology.blocks(nx, ny)?;
        let (px, py) = (boundaries.periodic_x(), boundaries.periodic_y());

        let partitions: Vec<Partition> = blocks
            .into_iter()
            .map(|block| {
                let links: EdgeMask = Edge::ALL
                    .into_iter()
                    .filter(|&side| topology.neighbour(block.rank, side, px, py).is_some())
                    .collect();
                let global: EdgeMask = Edge::ALL
                    .into_iter()
                    .filter(|&side| block.touches(side, &topology))
                    .collect();
                Partition::new(initial, block, links, global)
            })
            .collect();
        let transports = halo::mesh(&topology, px, py);

        info!(
            blocks_x = topology.blocks_x,
            blocks_y = topology.blocks_y,
            nx,
            ny,
            "partitioned domain built"
        );
        for p in &partitions {
            debug!(rank = p.rank(), window = ?p.block().window, links = ?p.links(), "partition");
        }

        Ok(Self { nx, ny, topology, boundaries, partitions, transports })
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Run `steps` full steps on every partition.
    pub fn advance(&mut self, steps: u64, omega: f64) -> DecompResult<()> {
        if steps == 0 {
            return Ok(());
        }
        if self.transports.len() != self.partitions.len() {
            return Err(DecompError::Aborted);
        }
        let transports = std::mem::take(&mut self.transports);
        let boundaries = &self.boundaries;

        let outcomes: Vec<DecompResult<ChannelTransport>> = thread::scope(|s| {
            let handles: Vec<_> = self
                .partitions
                .iter_mut()
                .zip(transports)
                .map(|(partition, mut transport)| {
                    let rank = partition.rank();
                    let handle = s.spawn(move || -> DecompResult<ChannelTransport> {
                        for _ in 0..steps {
                            partition.step(omega, boundaries, &mut transport)?;
                        }
                        Ok(transport)
                    });
                    (rank, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(rank, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(DecompError::WorkerPanicked { rank }))
                })
                .collect()
        });

        let mut first_err = None;
        let mut restored = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(transport) => restored.push(transport),
                Err(e @ DecompError::WorkerPanicked { .. }) => first_err = Some(e),
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            // Transports stay taken, so later calls fail with `Aborted`.
            Some(e) => Err(e),
            None => {
                self.transports = restored;
                Ok(())
            }
        }
    }

    /// Reassemble the owned cells of every partition into one global grid.
    pub fn gather(&self) -> DecompResult<Populations> {
        let mut global = Populations::zeros(self.nx, self.ny);
        for p in &self.partitions {
            let at = p.block().window;
            global.paste(p.populations(), p.interior(), at.x0, at.y0)?;
        }
        Ok(global)
    }

    /// Macroscopic fields of the gathered grid.
    pub fn fields(&self) -> DecompResult<MacroFields> {
        Ok(MacroFields::from_populations(&self.gather()?))
    }
}
