//! `lb-boundary` — edge treatments applied after streaming.
//!
//! A scenario picks one [`EdgeCondition`] per edge, bundled as a
//! [`BoundarySet`], once at configuration time.  Each step the set rewrites
//! only the outermost cells of the fluid window:
//!
//! | Condition     | Rule                                                     |
//! |---------------|----------------------------------------------------------|
//! | `Periodic`    | nothing; streaming already wrapped                       |
//! | `BounceBack`  | reflect populations that left through the wall           |
//! | `MovingWall`  | as `BounceBack`, minus `2 w_i rho (c_i . u_w) / cs^2`     |
//! | `Pressure`    | `feq(rho_bc, u of the adjacent interior cell)`           |
//!
//! # Example
//!
//! ```rust,ignore
//! let lid = BoundarySet::new(
//!     EdgeCondition::MovingWall { velocity: [0.1, 0.0] },
//!     EdgeCondition::BounceBack,
//!     EdgeCondition::BounceBack,
//!     EdgeCondition::BounceBack,
//! );
//! lid.validate()?;
//! state.collide(omega);
//! state.stream();
//! let (f, f_post) = state.split_mut();
//! lid.apply_all(f, f_post);
//! ```

pub mod condition;
pub mod error;
pub mod rules;
pub mod set;

#[cfg(test)]
mod tests;

pub use condition::EdgeCondition;
pub use error::{BoundaryError, BoundaryResult};
pub use set::BoundarySet;
