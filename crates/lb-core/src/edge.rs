//! Domain edges and rectangular windows into a population buffer.

use std::fmt;

/// One of the four sides of a rectangular domain.
///
/// `North` is the `y = ny - 1` side, `East` the `x = nx - 1` side.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    North,
    South,
    East,
    West,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> [i32; 2] {
        match self {
            Edge::North => [0, 1],
            Edge::South => [0, -1],
            Edge::East  => [1, 0],
            Edge::West  => [-1, 0],
        }
    }

    #[inline]
    pub fn opposite(self) -> Edge {
        match self {
            Edge::North => Edge::South,
            Edge::South => Edge::North,
            Edge::East  => Edge::West,
            Edge::West  => Edge::East,
        }
    }

    /// `true` for `East`/`West`, whose edge cells form a column.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::East | Edge::West)
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Edge::North => 0b0001,
            Edge::South => 0b0010,
            Edge::East  => 0b0100,
            Edge::West  => 0b1000,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::North => "north",
            Edge::South => "south",
            Edge::East  => "east",
            Edge::West  => "west",
        };
        f.write_str(name)
    }
}

// ── EdgeMask ──────────────────────────────────────────────────────────────────

/// A set of edges.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct EdgeMask(u8);

impl EdgeMask {
    pub const NONE: EdgeMask = EdgeMask(0);
    pub const ALL:  EdgeMask = EdgeMask(0b1111);

    #[inline]
    pub fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    #[inline]
    pub fn with(self, edge: Edge) -> EdgeMask {
        EdgeMask(self.0 | edge.bit())
    }

    #[inline]
    pub fn without(self, edge: Edge) -> EdgeMask {
        EdgeMask(self.0 & !edge.bit())
    }

    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |&e| self.contains(e))
    }
}

impl FromIterator<Edge> for EdgeMask {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(EdgeMask::NONE, EdgeMask::with)
    }
}

// ── Window ────────────────────────────────────────────────────────────────────

/// A rectangular region `[x0, x0 + nx) × [y0, y0 + ny)` of a buffer.
///
/// The serial solver's fluid window is the whole grid; a partition's is its
/// interior, one cell in from every side of the padded buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Window {
    pub x0: usize,
    pub y0: usize,
    pub nx: usize,
    pub ny: usize,
}

impl Window {
    pub fn new(x0: usize, y0: usize, nx: usize, ny: usize) -> Self {
        Self { x0, y0, nx, ny }
    }

    /// Exclusive upper x bound.
    #[inline]
    pub fn x1(&self) -> usize {
        self.x0 + self.nx
    }

    /// Exclusive upper y bound.
    #[inline]
    pub fn y1(&self) -> usize {
        self.y0 + self.ny
    }

    /// The cells lying on `edge`, ordered by increasing x (rows) or y
    /// (columns).
    pub fn edge_cells(&self, edge: Edge) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (x0, y0, x1, y1) = (self.x0, self.y0, self.x1(), self.y1());
        let (xs, ys) = match edge {
            Edge::North => (x0..x1, y1 - 1..y1),
            Edge::South => (x0..x1, y0..y0 + 1),
            Edge::East  => (x1 - 1..x1, y0..y1),
            Edge::West  => (x0..x0 + 1, y0..y1),
        };
        ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
    }

    /// The cell one step inward from `(x, y)` across `edge`.
    #[inline]
    pub fn inward(&self, edge: Edge, x: usize, y: usize) -> (usize, usize) {
        let [nx, ny] = edge.normal();
        ((x as i64 - nx as i64) as usize, (y as i64 - ny as i64) as usize)
    }
}
