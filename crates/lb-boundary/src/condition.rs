//! The closed set of edge treatments.

/// How one domain edge is treated after streaming.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeCondition {
    /// Wrap-around, already performed by streaming.  The opposite edge must
    /// be periodic too.
    Periodic,

    /// Stationary no-slip wall (half-way bounce-back).
    BounceBack,

    /// Wall sliding tangentially at `velocity` (bounce-back with momentum
    /// correction).
    MovingWall { velocity: [f64; 2] },

    /// Edge cells reset to the equilibrium at a prescribed `density` and the
    /// velocity of the adjacent interior cell.
    Pressure { density: f64 },
}

impl EdgeCondition {
    /// Build a pressure edge from a lattice pressure, `p = cs^2 rho`.
    pub fn from_pressure(pressure: f64) -> Self {
        EdgeCondition::Pressure { density: pressure / lb_core::lattice::CS2 }
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        matches!(self, EdgeCondition::Periodic)
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, EdgeCondition::BounceBack | EdgeCondition::MovingWall { .. })
    }
}
