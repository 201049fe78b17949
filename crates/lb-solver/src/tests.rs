//! Unit tests for the collision and streaming kernels.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lb_core::lattice::{self, Q};
use lb_core::Populations;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A grid of positive random populations near rest.
fn random_grid(nx: usize, ny: usize, seed: u64) -> Populations {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut f = Populations::uniform(nx, ny, 1.0, [0.0, 0.0]);
    for cell in f.cells_mut() {
        for v in cell.iter_mut() {
            *v *= rng.gen_range(0.8..1.2);
        }
    }
    f
}

fn momentum(f: &Populations) -> [f64; 2] {
    f.cells().iter().fold([0.0, 0.0], |acc, cell| {
        let (rho, u) = lattice::moments(cell);
        [acc[0] + rho * u[0], acc[1] + rho * u[1]]
    })
}

// ── Collision ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod collision_tests {
    use super::*;
    use crate::{collide, collide_cell, collide_window};
    use lb_core::Window;

    #[test]
    fn equilibrium_is_fixed_point_for_any_omega() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let rho = rng.gen_range(0.5..1.5);
            let u = [rng.gen_range(-0.1..0.1), rng.gen_range(-0.1..0.1)];
            let feq = lattice::equilibrium(rho, u);
            for omega in [0.2, 1.0, 1.5, 1.95] {
                let mut f = feq;
                collide_cell(&mut f, omega);
                for i in 0..Q {
                    assert!((f[i] - feq[i]).abs() < 1e-14, "omega {omega}, dir {i}");
                }
            }
        }
    }

    #[test]
    fn collision_conserves_density_and_momentum() {
        let mut f = random_grid(10, 10, 3);
        let (mass, mom) = (f.total_mass(), momentum(&f));
        collide(&mut f, 1.3);
        assert!((f.total_mass() - mass).abs() < 1e-10);
        let after = momentum(&f);
        assert!((after[0] - mom[0]).abs() < 1e-10 && (after[1] - mom[1]).abs() < 1e-10);
    }

    #[test]
    fn omega_one_jumps_to_equilibrium() {
        let mut f = random_grid(10, 10, 5);
        let expected: Vec<_> = f
            .cells()
            .iter()
            .map(|c| {
                let (rho, u) = lattice::moments(c);
                lattice::equilibrium(rho, u)
            })
            .collect();
        collide(&mut f, 1.0);
        for (got, want) in f.cells().iter().zip(&expected) {
            for i in 0..Q {
                assert!((got[i] - want[i]).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn window_leaves_outside_untouched() {
        let original = random_grid(12, 10, 9);
        let mut f = original.clone();
        collide_window(&mut f, &Window::new(1, 1, 10, 8), 1.0);
        assert_eq!(f.cell(0, 0), original.cell(0, 0));
        assert_eq!(f.cell(11, 5), original.cell(11, 5));
        assert_eq!(f.cell(5, 9), original.cell(5, 9));
        assert_ne!(f.cell(5, 5), original.cell(5, 5));
    }
}

// ── Streaming ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod streaming_tests {
    use super::*;
    use crate::stream;
    use lb_core::lattice::C;

    #[test]
    fn single_population_moves_along_its_vector() {
        for i in 1..Q {
            let mut src = Populations::zeros(10, 10);
            src.cell_mut(4, 4)[i] = 1.0;
            let mut dst = Populations::zeros(10, 10);
            stream(&src, &mut dst);
            let (x, y) = ((4 + C[i][0]) as usize, (4 + C[i][1]) as usize);
            assert_eq!(dst.cell(x, y)[i], 1.0, "direction {i}");
            assert!((dst.total_mass() - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn wraps_at_edges() {
        let mut src = Populations::zeros(10, 11);
        src.cell_mut(9, 10)[5] = 1.0; // (1, 1) out of the north-east corner
        src.cell_mut(0, 0)[7] = 2.0;  // (-1, -1) out of the south-west corner
        let mut dst = Populations::zeros(10, 11);
        stream(&src, &mut dst);
        assert_eq!(dst.cell(0, 0)[5], 1.0);
        assert_eq!(dst.cell(9, 10)[7], 2.0);
    }

    #[test]
    fn matches_independent_per_channel_shift() {
        let src = random_grid(10, 13, 21);
        let mut dst = Populations::zeros(10, 13);
        stream(&src, &mut dst);

        for i in 0..Q {
            for y in 0..13 {
                for x in 0..10 {
                    let tx = (x as i64 + C[i][0] as i64).rem_euclid(10) as usize;
                    let ty = (y as i64 + C[i][1] as i64).rem_euclid(13) as usize;
                    assert_eq!(dst.cell(tx, ty)[i], src.cell(x, y)[i]);
                }
            }
        }
    }

    #[test]
    fn domain_length_streams_restore_grid() {
        // Every displacement is ±1 along each axis, so n streams on an n x n
        // periodic grid bring every population home.
        let original = random_grid(10, 10, 4);
        let mut a = original.clone();
        let mut b = Populations::zeros(10, 10);
        for _ in 0..10 {
            stream(&a, &mut b);
            std::mem::swap(&mut a, &mut b);
        }
        assert_eq!(a, original);
    }

    #[test]
    fn rectangular_grid_restores_after_lcm_streams() {
        let original = random_grid(10, 15, 8);
        let mut a = original.clone();
        let mut b = Populations::zeros(10, 15);
        for _ in 0..30 {
            stream(&a, &mut b);
            std::mem::swap(&mut a, &mut b);
        }
        assert_eq!(a, original);
    }
}

// ── LatticeState ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;
    use crate::LatticeState;

    #[test]
    fn uniform_rest_state_is_fixed_point() {
        let initial = Populations::uniform(10, 10, 1.0, [0.0, 0.0]);
        let mut state = LatticeState::new(initial.clone());
        state.collide(1.0);
        state.stream();
        assert!(state.populations().max_abs_diff(&initial).unwrap() < 1e-15);
    }

    #[test]
    fn post_collision_is_pre_stream_buffer() {
        let mut state = LatticeState::new(random_grid(10, 10, 2));
        state.collide(0.8);
        let collided = state.populations().clone();
        state.stream();
        assert_eq!(state.post_collision(), &collided);
        assert_ne!(state.populations(), &collided);
    }

    #[test]
    fn mass_conserved_over_many_periodic_steps() {
        let mut state = LatticeState::new(random_grid(12, 10, 6));
        let mass = state.populations().total_mass();
        for _ in 0..100 {
            state.collide(1.2);
            state.stream();
        }
        let f = state.into_populations();
        assert!((f.total_mass() - mass).abs() < 1e-9);
        assert!(f.is_finite());
        assert!(f.min_population() > 0.0);
    }
}
