//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FrameSummaryRow, OutputResult, WalkerSnapshotRow};

/// Sink for walker snapshots and frame summaries.
///
/// From the observer's side every call is infallible: errors are stored and
/// retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of walker snapshots.
    fn write_snapshots(&mut self, rows: &[WalkerSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
