//! Unit tests for lb-boundary.

use lb_core::lattice::{self, Q, W};
use lb_core::{Edge, EdgeMask, Populations, Window};
use lb_solver::LatticeState;

use crate::{BoundaryError, BoundarySet, EdgeCondition};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn closed_box() -> BoundarySet {
    BoundarySet::new(
        EdgeCondition::BounceBack,
        EdgeCondition::BounceBack,
        EdgeCondition::BounceBack,
        EdgeCondition::BounceBack,
    )
}

fn lid(velocity: f64) -> BoundarySet {
    BoundarySet {
        north: EdgeCondition::MovingWall { velocity: [velocity, 0.0] },
        ..closed_box()
    }
}

/// A smooth, non-uniform initial state.
fn wavy(nx: usize, ny: usize) -> Populations {
    Populations::from_equilibrium(nx, ny, |x, y| {
        let rho = 1.0 + 0.01 * (x as f64 * 0.7).sin();
        (rho, [0.02 * (y as f64 * 0.5).cos(), 0.01 * (x as f64 * 0.3).sin()])
    })
}

fn step(state: &mut LatticeState, set: &BoundarySet, omega: f64) {
    state.collide(omega);
    state.stream();
    let (f, f_post) = state.split_mut();
    set.apply_all(f, f_post);
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn standard_sets_validate() {
        assert!(BoundarySet::periodic().validate().is_ok());
        assert!(closed_box().validate().is_ok());
        assert!(lid(0.1).validate().is_ok());
    }

    #[test]
    fn unpaired_periodic_rejected() {
        let set = BoundarySet { east: EdgeCondition::Periodic, ..closed_box() };
        assert!(matches!(set.validate(), Err(BoundaryError::UnpairedPeriodic { edge: Edge::East })));
    }

    #[test]
    fn normal_wall_velocity_rejected() {
        let set = BoundarySet {
            north: EdgeCondition::MovingWall { velocity: [0.0, 0.05] },
            ..closed_box()
        };
        assert!(matches!(set.validate(), Err(BoundaryError::NormalWallVelocity { edge: Edge::North, .. })));
    }

    #[test]
    fn non_finite_wall_velocity_rejected() {
        let set = lid(f64::NAN);
        assert!(matches!(set.validate(), Err(BoundaryError::NonFiniteWallVelocity { .. })));
    }

    #[test]
    fn bad_pressure_density_rejected() {
        let set = BoundarySet {
            west: EdgeCondition::Pressure { density: 0.0 },
            ..closed_box()
        };
        assert!(matches!(set.validate(), Err(BoundaryError::InvalidDensity { edge: Edge::West, .. })));
    }

    #[test]
    fn pressure_from_lattice_pressure() {
        let EdgeCondition::Pressure { density } = EdgeCondition::from_pressure(1.0 / 3.0) else {
            panic!("expected a pressure edge");
        };
        assert!((density - 1.0).abs() < 1e-15);
    }

    #[test]
    fn periodic_axes() {
        let couette = BoundarySet {
            north: EdgeCondition::MovingWall { velocity: [0.1, 0.0] },
            south: EdgeCondition::BounceBack,
            east:  EdgeCondition::Periodic,
            west:  EdgeCondition::Periodic,
        };
        assert!(couette.periodic_x());
        assert!(!couette.periodic_y());
        assert!(EdgeCondition::BounceBack.is_wall());
        assert!(!EdgeCondition::Pressure { density: 1.0 }.is_wall());
    }
}

// ── Walls ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wall_tests {
    use super::*;

    #[test]
    fn population_reflects_off_south_wall() {
        let mut f = Populations::zeros(10, 10);
        f.cell_mut(3, 0)[4] = 1.0;
        let mut state = LatticeState::new(f);
        state.stream();
        let (f, f_post) = state.split_mut();
        closed_box().apply_all(f, f_post);

        let f = state.populations();
        assert_eq!(f.cell(3, 0)[2], 1.0);
        // The copy that wrapped to the north row was overwritten.
        assert_eq!(f.cell(3, 9)[4], 0.0);
        assert!((f.total_mass() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn diagonal_reflects_into_corner_cell() {
        let mut f = Populations::zeros(10, 10);
        f.cell_mut(0, 0)[7] = 1.0;
        let mut state = LatticeState::new(f);
        state.stream();
        let (f, f_post) = state.split_mut();
        closed_box().apply_all(f, f_post);
        assert_eq!(state.populations().cell(0, 0)[5], 1.0);
        assert!((state.populations().total_mass() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn closed_box_conserves_mass() {
        let mut state = LatticeState::new(wavy(12, 10));
        let mass = state.populations().total_mass();
        let set = closed_box();
        for _ in 0..300 {
            step(&mut state, &set, 1.1);
        }
        assert!((state.populations().total_mass() - mass).abs() < 1e-9);
        assert!(state.populations().min_population() > 0.0);
    }

    #[test]
    fn moving_lid_conserves_mass() {
        let mut state = LatticeState::new(Populations::uniform(10, 10, 1.0, [0.0, 0.0]));
        let mass = state.populations().total_mass();
        let set = lid(0.1);
        for _ in 0..300 {
            step(&mut state, &set, 1.0);
        }
        assert!((state.populations().total_mass() - mass).abs() < 1e-9);
    }

    #[test]
    fn moving_wall_adds_momentum_correction() {
        let mut state = LatticeState::new(Populations::uniform(10, 10, 1.0, [0.0, 0.0]));
        step(&mut state, &lid(0.1), 1.0);

        let rho = W.iter().sum::<f64>();
        let term = 2.0 * W[5] * rho * 0.1 * 3.0;
        let top = state.populations().cell(4, 9);
        assert!((top[4] - W[2]).abs() < 1e-15);
        assert!((top[7] - (W[5] - term)).abs() < 1e-15);
        assert!((top[8] - (W[6] + term)).abs() < 1e-15);

        let (_, u) = lattice::moments(top);
        assert!(u[0] > 0.0, "lid should drag the top row east, got {u:?}");
    }

    #[test]
    fn walls_leave_interior_untouched() {
        let mut state = LatticeState::new(wavy(10, 10));
        state.collide(1.0);
        state.stream();
        let before = state.populations().clone();
        let (f, f_post) = state.split_mut();
        lid(0.1).apply_all(f, f_post);

        let f = state.populations();
        for y in 1..9 {
            for x in 1..9 {
                assert_eq!(f.cell(x, y), before.cell(x, y), "cell ({x}, {y})");
            }
        }
        assert_ne!(f.cell(5, 9), before.cell(5, 9));
    }

    #[test]
    fn mask_limits_edges() {
        let mut state = LatticeState::new(wavy(10, 10));
        state.collide(1.0);
        state.stream();
        let before = state.populations().clone();
        let (f, f_post) = state.split_mut();
        let window = Window::new(0, 0, 10, 10);
        closed_box().apply(f, f_post, &window, EdgeMask::NONE.with(Edge::South));

        let f = state.populations();
        assert_eq!(f.cell(5, 9), before.cell(5, 9));
        assert_ne!(f.cell(5, 0), before.cell(5, 0));
    }

    #[test]
    fn periodic_set_is_no_op() {
        let mut state = LatticeState::new(wavy(10, 10));
        state.collide(1.0);
        state.stream();
        let before = state.populations().clone();
        let (f, f_post) = state.split_mut();
        BoundarySet::periodic().apply_all(f, f_post);
        assert_eq!(state.populations(), &before);
    }
}

// ── Pressure edges ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pressure_tests {
    use super::*;

    fn channel(rho_in: f64, rho_out: f64) -> BoundarySet {
        BoundarySet {
            east: EdgeCondition::Pressure { density: rho_out },
            west: EdgeCondition::Pressure { density: rho_in },
            ..closed_box()
        }
    }

    #[test]
    fn inlet_column_takes_prescribed_density() {
        let mut state = LatticeState::new(wavy(12, 10));
        state.collide(1.0);
        state.stream();
        let (f, f_post) = state.split_mut();
        BoundarySet { north: EdgeCondition::Periodic, south: EdgeCondition::Periodic, ..channel(1.01, 0.99) }
            .apply_all(f, f_post);

        let f = state.populations();
        for y in 0..10 {
            let (rho_in, u_in) = f.moments(0, y);
            let (_, u_inner) = f.moments(1, y);
            assert!((rho_in - 1.01).abs() < 1e-12);
            assert!((u_in[0] - u_inner[0]).abs() < 1e-12 && (u_in[1] - u_inner[1]).abs() < 1e-12);
            let (rho_out, _) = f.moments(11, y);
            assert!((rho_out - 0.99).abs() < 1e-12);
        }
    }

    #[test]
    fn walls_override_pressure_at_corners() {
        let mut state = LatticeState::new(wavy(12, 10));
        state.collide(1.0);
        state.stream();
        let (f, f_post) = state.split_mut();
        channel(1.01, 0.99).apply_all(f, f_post);

        let post = state.post_collision().cell(0, 0);
        let f = state.populations().cell(0, 0);
        assert_eq!(f[2], post[4]);
        assert_eq!(f[5], post[7]);
        assert_eq!(f[6], post[8]);
    }

    #[test]
    fn pressure_gradient_drives_flow_east() {
        let mut state = LatticeState::new(Populations::uniform(30, 12, 1.0, [0.0, 0.0]));
        let set = channel(1.005, 0.995);
        for _ in 0..1000 {
            step(&mut state, &set, 1.0);
        }
        let (_, u) = state.populations().moments(15, 6);
        assert!(u[0] > 0.0, "expected eastward flow, got {u:?}");
        assert!(state.populations().is_finite());
        for i in 0..Q {
            assert!(state.populations().cell(15, 6)[i] > 0.0);
        }
    }
}
