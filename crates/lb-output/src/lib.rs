//! `lb-output` — snapshot sampling and output writers for the rust_lb
//! solver.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `points.csv`, `cuts.csv`, `summaries.csv`      |
//!
//! [`SimOutputObserver`] implements `lb_sim::SimObserver`: at every snapshot
//! it samples each configured [`Probe`] (a point, row or column of the
//! density or velocity field), adds a whole-grid summary, and hands the rows
//! to an [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use lb_output::{CsvWriter, Probe, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let probes = vec![Probe::VelocityColumn { x: 50 }, Probe::DensityPoint { x: 50, y: 50 }];
//! let mut obs = SimOutputObserver::new(writer, probes, &sim.config)?;
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod probe;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use probe::Probe;
pub use row::{Quantity, SampleRow, SummaryRow};
pub use writer::OutputWriter;
