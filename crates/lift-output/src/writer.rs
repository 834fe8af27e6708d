//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarriageSnapshotRow, OutputResult, TickSummaryRow};

/// Sink for per-tick output rows.
///
/// Errors never interrupt the simulation; the observer stores them for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of carriage snapshots.
    fn write_snapshots(&mut self, rows: &[CarriageSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
