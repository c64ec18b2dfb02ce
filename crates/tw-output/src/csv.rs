//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `walker_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputResult, WalkerSnapshotRow};

pub const SNAPSHOT_HEADERS: [&str; 10] = [
    "walker_id", "actor_id", "frame", "x", "y", "direction", "speed", "dest_col", "dest_row",
    "paused",
];

pub const SUMMARY_HEADERS: [&str; 8] = [
    "frame", "elapsed_ms", "moved", "idle", "paused", "released", "orphaned", "pixels",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("walker_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[WalkerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            // Idle walkers leave the destination columns empty.
            let (dest_col, dest_row) = match row.destination {
                Some(t) => (t.col.to_string(), t.row.to_string()),
                None => (String::new(), String::new()),
            };
            self.snapshots.write_record(&[
                row.walker_id.to_string(),
                row.actor_id.to_string(),
                row.frame.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.direction.as_str().to_owned(),
                row.speed.to_string(),
                dest_col,
                dest_row,
                (row.paused as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.elapsed_ms.to_string(),
            row.moved.to_string(),
            row.idle.to_string(),
            row.paused.to_string(),
            row.released.to_string(),
            row.orphaned.to_string(),
            row.pixels.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
