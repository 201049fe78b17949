//! `lb-solver` — the per-step kernels of the lattice Boltzmann method.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`collision`] | BGK relaxation toward local equilibrium                 |
//! | [`streaming`] | Periodic shift of each channel by its lattice vector    |
//! | [`state`]     | `LatticeState`: live buffer + post-collision snapshot   |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs both kernels on Rayon's thread pool.              |

pub mod collision;
pub mod state;
pub mod streaming;

#[cfg(test)]
mod tests;

pub use collision::{collide, collide_cell, collide_window};
pub use state::LatticeState;
pub use streaming::stream;
