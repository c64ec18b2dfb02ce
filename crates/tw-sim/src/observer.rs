//! Simulation observer trait for progress reporting and data collection.

use tw_actor::ActorStore;
use tw_core::Frame;
use tw_map::TileMap;
use tw_walk::{PassReport, WalkerRegistry};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, report: &PassReport) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {} walkers moved", report.moved);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before the control phase.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after the walker update with that pass's tallies.
    fn on_frame_end(&mut self, _frame: Frame, _report: &PassReport) {}

    /// Called at snapshot intervals (every `config.output_interval_frames`
    /// frames), after `on_frame_end`.
    fn on_snapshot(
        &mut self,
        _frame:   Frame,
        _walkers: &WalkerRegistry,
        _actors:  &ActorStore,
        _map:     &TileMap,
    ) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
