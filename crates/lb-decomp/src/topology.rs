//! The block grid: how many blocks along each axis, and which cells each
//! block owns.

use lb_core::{Edge, Window};

use crate::{DecompError, DecompResult};

/// Smallest block extent along either axis.  A pressure edge reads the cell
/// one step inward, which must still belong to the same block.
pub const MIN_BLOCK: usize = 2;

/// A `blocks_x × blocks_y` grid of partitions.
///
/// Ranks are assigned row-major from the south-west corner:
/// `rank = by * blocks_x + bx`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Topology {
    pub blocks_x: usize,
    pub blocks_y: usize,
}

impl Topology {
    pub fn new(blocks_x: usize, blocks_y: usize) -> Self {
        Self { blocks_x, blocks_y }
    }

    /// The factorisation of `units` into `blocks_x × blocks_y` whose factors
    /// are closest together, with `blocks_x >= blocks_y`.
    ///
    /// A prime unit count can only be split `units × 1`, which gives long,
    /// thin blocks.
    pub fn balanced(units: usize) -> DecompResult<Self> {
        if units == 0 {
            return Err(DecompError::Topology("unit count must be positive".into()));
        }
        let blocks_y = (1..=units)
            .take_while(|b| b * b <= units)
            .filter(|b| units % b == 0)
            .last()
            .unwrap_or(1);
        Ok(Self::new(units / blocks_y, blocks_y))
    }

    /// Number of partitions.
    #[inline]
    pub fn units(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    #[inline]
    pub fn rank(&self, bx: usize, by: usize) -> usize {
        by * self.blocks_x + bx
    }

    /// `(bx, by)` of `rank`.
    #[inline]
    pub fn coords(&self, rank: usize) -> (usize, usize) {
        (rank % self.blocks_x, rank / self.blocks_x)
    }

    /// The rank across `side` of `rank`.  Global edges wrap to the opposite
    /// block (possibly `rank` itself) when that axis is periodic and have no
    /// neighbour otherwise.
    pub fn neighbour(&self, rank: usize, side: Edge, periodic_x: bool, periodic_y: bool) -> Option<usize> {
        let (bx, by) = self.coords(rank);
        let step = |v: usize, n: usize, forward: bool, periodic: bool| -> Option<usize> {
            match (forward, v) {
                (true, v) if v + 1 < n => Some(v + 1),
                (true, _) => periodic.then_some(0),
                (false, 0) => periodic.then_some(n - 1),
                (false, v) => Some(v - 1),
            }
        };
        match side {
            Edge::East  => step(bx, self.blocks_x, true, periodic_x).map(|x| self.rank(x, by)),
            Edge::West  => step(bx, self.blocks_x, false, periodic_x).map(|x| self.rank(x, by)),
            Edge::North => step(by, self.blocks_y, true, periodic_y).map(|y| self.rank(bx, y)),
            Edge::South => step(by, self.blocks_y, false, periodic_y).map(|y| self.rank(bx, y)),
        }
    }

    /// Split an `nx × ny` grid into this topology's blocks, ordered by rank.
    pub fn blocks(&self, nx: usize, ny: usize) -> DecompResult<Vec<Block>> {
        if self.blocks_x == 0 || self.blocks_y == 0 {
            return Err(DecompError::Topology(format!(
                "{}x{} has no blocks",
                self.blocks_x, self.blocks_y
            )));
        }
        let xs = split(nx, self.blocks_x);
        let ys = split(ny, self.blocks_y);

        let mut blocks = Vec::with_capacity(self.units());
        for (by, &(y0, bny)) in ys.iter().enumerate() {
            for (bx, &(x0, bnx)) in xs.iter().enumerate() {
                let rank = self.rank(bx, by);
                if bnx < MIN_BLOCK || bny < MIN_BLOCK {
                    return Err(DecompError::BlockTooSmall { rank, nx: bnx, ny: bny, min: MIN_BLOCK });
                }
                blocks.push(Block {
                    rank,
                    coords: (bx, by),
                    window: Window::new(x0, y0, bnx, bny),
                });
            }
        }
        Ok(blocks)
    }
}

/// `(start, length)` of each of `parts` contiguous pieces of `extent`.
/// The first `extent % parts` pieces are one cell longer.
pub fn split(extent: usize, parts: usize) -> Vec<(usize, usize)> {
    let (base, extra) = (extent / parts, extent % parts);
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + usize::from(i < extra);
            let piece = (start, len);
            start += len;
            piece
        })
        .collect()
}

// ── Block ─────────────────────────────────────────────────────────────────────

/// The cells owned by one partition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Block {
    pub rank:   usize,
    pub coords: (usize, usize),
    /// Owned cells in global coordinates.
    pub window: Window,
}

impl Block {
    /// `true` if this block's `side` lies on the global domain edge.
    pub fn touches(&self, side: Edge, topology: &Topology) -> bool {
        let (bx, by) = self.coords;
        match side {
            Edge::East  => bx + 1 == topology.blocks_x,
            Edge::West  => bx == 0,
            Edge::North => by + 1 == topology.blocks_y,
            Edge::South => by == 0,
        }
    }
}
