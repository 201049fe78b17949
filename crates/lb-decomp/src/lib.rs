//! `lb-decomp` — running the solver across a 2D grid of partitions.
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`topology`]  | `Topology` block grid, `Block` ownership, rank layout    |
//! | [`halo`]      | `HaloTransport` contract, in-process `ChannelTransport`  |
//! | [`partition`] | `Partition`: padded buffer, per-step sequence, exchange  |
//! | [`domain`]    | `PartitionedDomain`: scatter, threaded stepping, gather  |
//! | [`error`]     | `DecompError`, `DecompResult`                            |
//!
//! # Step sequence per partition
//!
//! ```text
//! collide   interior + linked ghost sides
//! stream    whole padded buffer
//! boundary  interior window, global edges only
//! exchange  east/west columns, then north/south rows (fills corner ghosts)
//! ```
//!
//! After the exchange every linked ghost cell holds its neighbour's value for
//! the step just finished, so the next step reproduces the serial update of
//! the same global grid.

pub mod domain;
pub mod error;
pub mod halo;
pub mod partition;
pub mod topology;


pub use domain::PartitionedDomain;
pub use error::{DecompError, DecompResult};
pub use halo::{ChannelTransport, HaloTransport, Layer};
pub use partition::Partition;
pub use topology::{Block, MIN_BLOCK, Topology};
