//! `BoundarySet` — one condition per edge, selected once per run.

use lb_core::{Edge, EdgeMask, Populations, Window};

use crate::rules;
use crate::{BoundaryError, BoundaryResult, EdgeCondition};

/// The edge treatments of one scenario.
///
/// # Application order
///
/// Walls are applied first: stationary walls, then moving walls, so a
/// moving wall overrides a stationary one on the diagonal link they share.
/// Pressure edges follow and read their inward neighbour with its wall
/// links already corrected.  When a pressure edge is present the walls are
/// applied once more, so corner cells shared with a wall keep the wall's
/// reflected populations.  Walls thereby take precedence over both
/// pressure edges and periodic wrap at corners, and no edge rule ever reads
/// a population that wrapped in from the far side of a wall.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySet {
    pub north: EdgeCondition,
    pub south: EdgeCondition,
    pub east:  EdgeCondition,
    pub west:  EdgeCondition,
}

impl BoundarySet {
    pub fn new(
        north: EdgeCondition,
        south: EdgeCondition,
        east:  EdgeCondition,
        west:  EdgeCondition,
    ) -> Self {
        Self { north, south, east, west }
    }

    /// Periodic on all four edges.
    pub fn periodic() -> Self {
        Self::new(
            EdgeCondition::Periodic,
            EdgeCondition::Periodic,
            EdgeCondition::Periodic,
            EdgeCondition::Periodic,
        )
    }

    pub fn get(&self, edge: Edge) -> EdgeCondition {
        match edge {
            Edge::North => self.north,
            Edge::South => self.south,
            Edge::East  => self.east,
            Edge::West  => self.west,
        }
    }

    /// `true` if the domain wraps around along x.
    pub fn periodic_x(&self) -> bool {
        self.east.is_periodic()
    }

    /// `true` if the domain wraps around along y.
    pub fn periodic_y(&self) -> bool {
        self.north.is_periodic()
    }

    /// Check that periodic edges come in opposite pairs, wall velocities are
    /// finite and tangential, and pressure densities are positive.
    pub fn validate(&self) -> BoundaryResult<()> {
        for edge in Edge::ALL {
            match self.get(edge) {
                EdgeCondition::Periodic => {
                    if !self.get(edge.opposite()).is_periodic() {
                        return Err(BoundaryError::UnpairedPeriodic { edge });
                    }
                }
                EdgeCondition::BounceBack => {}
                EdgeCondition::MovingWall { velocity } => {
                    if !velocity.iter().all(|v| v.is_finite()) {
                        return Err(BoundaryError::NonFiniteWallVelocity { edge, velocity });
                    }
                    let [nx, ny] = edge.normal();
                    if nx as f64 * velocity[0] + ny as f64 * velocity[1] != 0.0 {
                        return Err(BoundaryError::NormalWallVelocity { edge, velocity });
                    }
                }
                EdgeCondition::Pressure { density } => {
                    if !(density.is_finite() && density > 0.0) {
                        return Err(BoundaryError::InvalidDensity { edge, density });
                    }
                }
            }
        }
        Ok(())
    }

    /// Rewrite the edge cells of `window` on every edge in `edges`.
    ///
    /// `f` holds the streamed populations, `f_post` the post-collision
    /// populations they were streamed from.  Cells not on an edge in `edges`
    /// are left untouched.
    pub fn apply(&self, f: &mut Populations, f_post: &Populations, window: &Window, edges: EdgeMask) {
        self.apply_walls(f, f_post, window, edges);

        let mut pressure = false;
        for edge in edges.iter() {
            if let EdgeCondition::Pressure { density } = self.get(edge) {
                rules::pressure(f, window, edge, density);
                pressure = true;
            }
        }
        if pressure {
            self.apply_walls(f, f_post, window, edges);
        }
    }

    /// [`apply`][Self::apply] over a whole serial grid.
    pub fn apply_all(&self, f: &mut Populations, f_post: &Populations) {
        let window = f.window();
        self.apply(f, f_post, &window, EdgeMask::ALL);
    }

    fn apply_walls(&self, f: &mut Populations, f_post: &Populations, window: &Window, edges: EdgeMask) {
        for edge in edges.iter() {
            if let EdgeCondition::BounceBack = self.get(edge) {
                rules::bounce_back(f, f_post, window, edge, [0.0, 0.0]);
            }
        }
        for edge in edges.iter() {
            if let EdgeCondition::MovingWall { velocity } = self.get(edge) {
                rules::bounce_back(f, f_post, window, edge, velocity);
            }
        }
    }
}
