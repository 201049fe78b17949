//! `lb-sim` — the simulation driver for the rust_lb solver.
//!
//! # Step loop
//!
//! ```text
//! Configured ──run──▶ Running ──end_step reached──▶ Finished
//!
//! per step:
//!   ① Collide     — BGK relaxation toward local equilibrium
//!   ② Stream      — shift each channel by its lattice vector
//!   ③ Boundaries  — the scenario's edge rules on global edges
//!   ④ Exchange    — halo layers between partitions (partitioned only)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs collision and streaming on Rayon's thread pool.   |
//! | `serde`    | Serialize/deserialize `LbConfig` and `Scenario`.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lb_core::LbConfig;
//! use lb_sim::{NoopObserver, Scenario, SimBuilder};
//!
//! let config = LbConfig::new(50, 50, 5_000, 1.0);
//! let mut sim = SimBuilder::new(config, Scenario::SlidingLid { wall_velocity: 0.1 }).build()?;
//! sim.run(&mut NoopObserver)?;
//! let u = sim.velocity_at(25, 49)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::{Decomposition, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::Scenario;
pub use sim::{Backend, Sim, SimState};
