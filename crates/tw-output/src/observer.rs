//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use tw_actor::ActorStore;
use tw_core::{Frame, SimConfig};
use tw_map::TileMap;
use tw_sim::SimObserver;
use tw_walk::{PassReport, WalkerRegistry};

use crate::row::{FrameSummaryRow, WalkerSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes walker snapshots and frame summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    frame_duration_ms: u32,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// frames to elapsed milliseconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            frame_duration_ms: config.frame_duration_ms,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, report: &PassReport) {
        let row = FrameSummaryRow {
            frame:      frame.0,
            elapsed_ms: frame.0 * u64::from(self.frame_duration_ms),
            moved:      report.moved as u64,
            idle:       report.idle as u64,
            paused:     report.paused as u64,
            released:   report.released as u64,
            orphaned:   report.orphaned as u64,
            pixels:     report.pixels,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        frame:   Frame,
        walkers: &WalkerRegistry,
        actors:  &ActorStore,
        _map:    &TileMap,
    ) {
        let rows: Vec<WalkerSnapshotRow> = walkers
            .iter()
            .filter_map(|(id, walker)| {
                let actor = walker.actor();
                let pos = actors.position(actor)?;
                Some(WalkerSnapshotRow {
                    walker_id:   id.0,
                    actor_id:    actor.0,
                    frame:       frame.0,
                    x:           pos.x,
                    y:           pos.y,
                    direction:   walker.direction,
                    speed:       walker.speed,
                    destination: walker.destination(),
                    paused:      !actors.is_active(actor),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
