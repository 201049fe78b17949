//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SampleRow, SummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the samples of every point probe at one snapshot.
    fn write_points(&mut self, rows: &[SampleRow]) -> OutputResult<()>;

    /// Write the samples of every cut probe at one snapshot.
    fn write_cuts(&mut self, rows: &[SampleRow]) -> OutputResult<()>;

    /// Write one summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
