//! `lb-core` — foundational types for the `rust_lb` lattice Boltzmann solver.
//!
//! This crate is a dependency of every other `lb-*` crate.  It has no `lb-*`
//! dependencies and only `itertools` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`lattice`]   | D2Q9 vectors and weights, moments, equilibrium, units   |
//! | [`grid`]      | `Populations` — the owned population buffer             |
//! | [`fields`]    | `MacroFields` snapshots, point and cut sampling         |
//! | [`edge`]      | `Edge`, `EdgeMask`, `Window`                            |
//! | [`step`]      | `Step` counter                                          |
//! | [`config`]    | `LbConfig` and its validation                           |
//! | [`error`]     | `LbError`, `LbResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to configuration types.     |

pub mod config;
pub mod edge;
pub mod error;
pub mod fields;
pub mod grid;
pub mod lattice;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LbConfig, MIN_EXTENT};
pub use edge::{Edge, EdgeMask, Window};
pub use error::{LbError, LbResult};
pub use fields::{Axis, MacroFields};
pub use grid::Populations;
pub use lattice::{Cell, Q};
pub use step::Step;
