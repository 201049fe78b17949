//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `points.csv`
//! - `cuts.csv`
//! - `summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SampleRow, SummaryRow};

const SAMPLE_HEADER: [&str; 6] = ["step", "probe", "x", "y", "quantity", "value"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    points:    Writer<File>,
    cuts:      Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut points = Writer::from_path(dir.join("points.csv"))?;
        points.write_record(SAMPLE_HEADER)?;

        let mut cuts = Writer::from_path(dir.join("cuts.csv"))?;
        cuts.write_record(SAMPLE_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(["step", "total_mass", "mean_density", "max_speed"])?;

        Ok(Self {
            points,
            cuts,
            summaries,
            finished: false,
        })
    }
}

fn write_samples(out: &mut Writer<File>, rows: &[SampleRow]) -> OutputResult<()> {
    for row in rows {
        out.write_record(&[
            row.step.to_string(),
            row.probe.clone(),
            row.x.to_string(),
            row.y.to_string(),
            row.quantity.as_str().to_string(),
            row.value.to_string(),
        ])?;
    }
    Ok(())
}

impl OutputWriter for CsvWriter {
    fn write_points(&mut self, rows: &[SampleRow]) -> OutputResult<()> {
        write_samples(&mut self.points, rows)
    }

    fn write_cuts(&mut self, rows: &[SampleRow]) -> OutputResult<()> {
        write_samples(&mut self.cuts, rows)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.total_mass.to_string(),
            row.mean_density.to_string(),
            row.max_speed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.points.flush()?;
        self.cuts.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
