//! The D2Q9 lattice model.
//!
//! Direction indices:
//!
//! ```text
//!     6   2   5
//!       \ | /
//!     3 — 0 — 1
//!       / | \
//!     7   4   8
//! ```
//!
//! Everything here is a pure function of one cell's populations.  Density is
//! assumed to stay bounded away from zero: `velocity` divides by it without a
//! guard, so a collapsing density shows up as `inf`/`NaN` in the fields
//! instead of being masked.

use itertools::izip;

/// Number of discrete velocities.
pub const Q: usize = 9;

/// Lattice vectors, indexed as in the module diagram.
pub const C: [[i32; 2]; Q] = [
    [0, 0],
    [1, 0],
    [0, 1],
    [-1, 0],
    [0, -1],
    [1, 1],
    [-1, 1],
    [-1, -1],
    [1, -1],
];

/// Weights corresponding to the lattice vectors.
pub const W: [f64; Q] = [
    4.0 / 9.0,
    1.0 / 9.0,
    1.0 / 9.0,
    1.0 / 9.0,
    1.0 / 9.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 36.0,
];

/// Index of the direction pointing the opposite way, `C[OPPOSITE[i]] == -C[i]`.
pub const OPPOSITE: [usize; Q] = [0, 3, 4, 1, 2, 7, 8, 5, 6];

/// Sound speed squared.
pub const CS2: f64 = 1.0 / 3.0;

/// One cell's populations.
pub type Cell = [f64; Q];

/// Zeroth moment: the sum of all populations.
#[inline]
pub fn density(f: &Cell) -> f64 {
    f.iter().sum()
}

/// First moment divided by `density`.
#[inline]
pub fn velocity(f: &Cell, density: f64) -> [f64; 2] {
    let mut momentum = [0.0; 2];
    for (f, c) in izip!(f, C) {
        momentum[0] += c[0] as f64 * f;
        momentum[1] += c[1] as f64 * f;
    }
    [momentum[0] / density, momentum[1] / density]
}

/// Density and velocity of one cell.
#[inline]
pub fn moments(f: &Cell) -> (f64, [f64; 2]) {
    let rho = density(f);
    (rho, velocity(f, rho))
}

/// Second-order equilibrium distribution for the given density and velocity.
///
/// `feq_i = w_i rho (1 + 3 c_i.u + 9/2 (c_i.u)^2 - 3/2 |u|^2)`
#[inline]
pub fn equilibrium(density: f64, velocity: [f64; 2]) -> Cell {
    let u_dot_u = velocity[0] * velocity[0] + velocity[1] * velocity[1];

    let mut result = [0.0; Q];
    for (val, c, w) in izip!(&mut result, C, W) {
        let c_dot_u = c[0] as f64 * velocity[0] + c[1] as f64 * velocity[1];
        *val = w * density * (1.0 + 3.0 * c_dot_u + 4.5 * c_dot_u * c_dot_u - 1.5 * u_dot_u);
    }
    result
}

/// Dot product of lattice vector `i` with `u`.
#[inline]
pub fn c_dot(i: usize, u: [f64; 2]) -> f64 {
    C[i][0] as f64 * u[0] + C[i][1] as f64 * u[1]
}

// ── Lattice units ─────────────────────────────────────────────────────────────

/// Kinematic viscosity of the BGK fluid for a relaxation parameter `omega`.
#[inline]
pub fn kinematic_viscosity(omega: f64) -> f64 {
    CS2 * (1.0 / omega - 0.5)
}

/// Relaxation parameter that yields kinematic viscosity `nu`.
#[inline]
pub fn omega_for_viscosity(nu: f64) -> f64 {
    1.0 / (nu / CS2 + 0.5)
}

/// [Reynolds number](https://en.wikipedia.org/wiki/Reynolds_number) of a flow
/// with the given characteristic velocity and length at relaxation `omega`.
#[inline]
pub fn reynolds_number(velocity: f64, characteristic_length: f64, omega: f64) -> f64 {
    velocity * characteristic_length / kinematic_viscosity(omega)
}
