//! Physical scenarios: initial condition plus edge treatment.

use std::f64::consts::PI;

use lb_boundary::{BoundarySet, EdgeCondition};
use lb_core::lattice::CS2;
use lb_core::Populations;

use crate::{SimError, SimResult};

/// The physical setup of a run.
///
/// | Variant             | Initial state                          | N / S / E / W                     |
/// |---------------------|----------------------------------------|-----------------------------------|
/// | `CollisionTest`     | rest, centre cell `1 + peak`           | periodic                          |
/// | `ShearWaveDensity`  | `rho0 + eps sin(2 pi x / nx)`, rest    | periodic                          |
/// | `ShearWaveVelocity` | `u_x = eps sin(2 pi y / ny)`           | periodic                          |
/// | `Couette`           | rest                                   | moving / wall / periodic          |
/// | `Poiseuille`        | rest                                   | wall / wall / outlet / inlet      |
/// | `SlidingLid`        | rest                                   | moving / wall / wall / wall       |
///
/// "Rest" is density 1 and zero velocity.  Every initial population field is
/// the equilibrium of its density and velocity fields.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    /// A single density bump spreading through a periodic box.
    CollisionTest { peak: f64 },

    /// Decay of a sinusoidal density perturbation along x.
    ShearWaveDensity { rho0: f64, epsilon: f64 },

    /// Decay of a sinusoidal shear velocity profile along y.
    ShearWaveVelocity { epsilon: f64 },

    /// Flow between a lid moving east at `wall_velocity` and a fixed floor.
    Couette { wall_velocity: f64 },

    /// Channel flow driven by a density difference between the west inlet
    /// and the east outlet.
    Poiseuille { density_in: f64, density_out: f64 },

    /// Lid-driven cavity.
    SlidingLid { wall_velocity: f64 },
}

impl Scenario {
    /// Poiseuille flow from a lattice pressure difference, centred on the
    /// rest pressure `cs^2`.
    pub fn pressure_difference(delta_p: f64) -> Self {
        Scenario::Poiseuille {
            density_in:  (CS2 + delta_p / 2.0) / CS2,
            density_out: (CS2 - delta_p / 2.0) / CS2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::CollisionTest { .. }     => "collision-test",
            Scenario::ShearWaveDensity { .. }  => "shear-wave-density",
            Scenario::ShearWaveVelocity { .. } => "shear-wave-velocity",
            Scenario::Couette { .. }           => "couette",
            Scenario::Poiseuille { .. }        => "poiseuille",
            Scenario::SlidingLid { .. }        => "sliding-lid",
        }
    }

    /// Reject parameters that start from a non-positive density or drive a
    /// wall at or beyond the lattice sound speed.
    pub fn validate(&self) -> SimResult<()> {
        let sound_speed = CS2.sqrt();
        let wall = |u: f64| {
            if u.is_finite() && u.abs() < sound_speed {
                Ok(())
            } else {
                Err(SimError::Config(format!(
                    "wall velocity {u} must be below the lattice sound speed {sound_speed:.4}"
                )))
            }
        };
        match *self {
            Scenario::CollisionTest { peak } => {
                if !(peak.is_finite() && peak > -1.0) {
                    return Err(SimError::Config(format!("density peak {peak} must exceed -1")));
                }
            }
            Scenario::ShearWaveDensity { rho0, epsilon } => {
                if !(epsilon.is_finite() && rho0.is_finite() && rho0 > epsilon.abs()) {
                    return Err(SimError::Config(format!(
                        "rho0 {rho0} must exceed the perturbation {epsilon} to keep density positive"
                    )));
                }
            }
            Scenario::ShearWaveVelocity { epsilon } => wall(epsilon)?,
            Scenario::Couette { wall_velocity } | Scenario::SlidingLid { wall_velocity } => {
                wall(wall_velocity)?
            }
            Scenario::Poiseuille { density_in, density_out } => {
                for rho in [density_in, density_out] {
                    if !(rho.is_finite() && rho > 0.0) {
                        return Err(SimError::Config(format!("edge density {rho} must be positive")));
                    }
                }
            }
        }
        Ok(())
    }

    /// The edge treatments of this scenario.
    pub fn boundaries(&self) -> BoundarySet {
        use EdgeCondition::{BounceBack, MovingWall, Periodic, Pressure};

        match *self {
            Scenario::CollisionTest { .. }
            | Scenario::ShearWaveDensity { .. }
            | Scenario::ShearWaveVelocity { .. } => BoundarySet::periodic(),
            Scenario::Couette { wall_velocity } => BoundarySet::new(
                MovingWall { velocity: [wall_velocity, 0.0] },
                BounceBack,
                Periodic,
                Periodic,
            ),
            Scenario::Poiseuille { density_in, density_out } => BoundarySet::new(
                BounceBack,
                BounceBack,
                Pressure { density: density_out },
                Pressure { density: density_in },
            ),
            Scenario::SlidingLid { wall_velocity } => BoundarySet::new(
                MovingWall { velocity: [wall_velocity, 0.0] },
                BounceBack,
                BounceBack,
                BounceBack,
            ),
        }
    }

    /// The initial population field on an `nx × ny` grid.
    pub fn initial(&self, nx: usize, ny: usize) -> Populations {
        match *self {
            Scenario::CollisionTest { peak } => {
                let (cx, cy) = (nx / 2, ny / 2);
                Populations::from_equilibrium(nx, ny, |x, y| {
                    let rho = if (x, y) == (cx, cy) { 1.0 + peak } else { 1.0 };
                    (rho, [0.0, 0.0])
                })
            }
            Scenario::ShearWaveDensity { rho0, epsilon } => Populations::from_equilibrium(nx, ny, |x, _| {
                (rho0 + epsilon * (2.0 * PI * x as f64 / nx as f64).sin(), [0.0, 0.0])
            }),
            Scenario::ShearWaveVelocity { epsilon } => Populations::from_equilibrium(nx, ny, |_, y| {
                (1.0, [epsilon * (2.0 * PI * y as f64 / ny as f64).sin(), 0.0])
            }),
            Scenario::Couette { .. } | Scenario::Poiseuille { .. } | Scenario::SlidingLid { .. } => {
                Populations::uniform(nx, ny, 1.0, [0.0, 0.0])
            }
        }
    }
}
