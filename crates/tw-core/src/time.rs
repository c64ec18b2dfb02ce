//! Frame-stepped time model.
//!
//! Time is a monotonically increasing `Frame` counter.  One registry update
//! runs per frame; the wall-clock length of a frame only matters for output
//! and logging, and is held in `FrameClock`.

use std::fmt;

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ───────────────────────────────────────────────────────────────

/// Tracks the current frame and maps it to elapsed milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Milliseconds one frame represents.
    pub frame_duration_ms: u32,
    /// The current frame, advanced once per update.
    pub current_frame: Frame,
}

impl FrameClock {
    pub fn new(frame_duration_ms: u32) -> Self {
        Self {
            frame_duration_ms,
            current_frame: Frame::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = self.current_frame + 1;
    }

    /// Simulated milliseconds since frame 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_frame.0 * u64::from(self.frame_duration_ms)
    }

    /// Milliseconds at which `frame` starts.
    #[inline]
    pub fn ms_at(&self, frame: Frame) -> u64 {
        frame.0 * u64::from(self.frame_duration_ms)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ms)", self.current_frame, self.elapsed_ms())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the simulation driver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds per frame.  Default: 16 (≈60 fps).
    pub frame_duration_ms: u32,

    /// Total frames to simulate.
    pub total_frames: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Snapshot walker state every N frames.  0 disables snapshots.
    pub output_interval_frames: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_duration_ms:      16,
            total_frames:           600,
            seed:                   42,
            output_interval_frames: 1,
        }
    }
}

impl SimConfig {
    /// The frame at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Reject configurations the frame loop cannot run with.
    pub fn validate(&self) -> crate::TwResult<()> {
        if self.frame_duration_ms == 0 {
            return Err(crate::TwError::Config("frame_duration_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.frame_duration_ms)
    }

    /// `true` if a snapshot is due at `frame`.
    #[inline]
    pub fn snapshot_due(&self, frame: Frame) -> bool {
        self.output_interval_frames > 0 && frame.0.is_multiple_of(self.output_interval_frames)
    }
}
