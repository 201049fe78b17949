//! Snapshot sampling observer.

use lb_core::{LbConfig, MacroFields, Step};
use lb_sim::SimObserver;

use crate::row::{SampleRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, Probe};

/// A [`SimObserver`] that samples every snapshot with a fixed set of
/// [`Probe`]s and writes the samples plus a whole-grid summary to any
/// [`OutputWriter`] backend.
///
/// `SimObserver` hooks cannot fail, so the first sampling or write error is
/// held until [`take_error`][Self::take_error] is called after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    probes:     Vec<Probe>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.  Every probe must lie inside
    /// the grid described by `config`.
    pub fn new(writer: W, probes: Vec<Probe>, config: &LbConfig) -> OutputResult<Self> {
        for probe in &probes {
            probe.check(config.nx, config.ny)?;
        }
        Ok(Self { writer, probes, last_error: None })
    }

    #[inline]
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// The first error hit since the last call, or `None` if every snapshot
    /// was written.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Consume the observer and return its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, step: Step, fields: &MacroFields) -> OutputResult<()> {
        let mut points: Vec<SampleRow> = Vec::new();
        let mut cuts: Vec<SampleRow> = Vec::new();
        for probe in &self.probes {
            let rows = probe.sample(step.0, fields)?;
            if probe.is_point() {
                points.extend(rows);
            } else {
                cuts.extend(rows);
            }
        }
        if !points.is_empty() {
            self.writer.write_points(&points)?;
        }
        if !cuts.is_empty() {
            self.writer.write_cuts(&cuts)?;
        }

        let cells = (fields.nx() * fields.ny()) as f64;
        let total_mass = fields.total_mass();
        self.writer.write_summary(&SummaryRow {
            step: step.0,
            total_mass,
            mean_density: total_mass / cells,
            max_speed: fields.max_speed(),
        })
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error = self.last_error.take().or(Some(e));
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, step: Step, fields: &MacroFields) {
        let result = self.record(step, fields);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
