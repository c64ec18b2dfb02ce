//! Plain data row types written by output backends.

use tw_core::{Direction, TileCoord};

/// One walker's state at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerSnapshotRow {
    pub walker_id:   u32,
    pub actor_id:    u32,
    pub frame:       u64,
    pub x:           i32,
    pub y:           i32,
    pub direction:   Direction,
    pub speed:       u32,
    /// Committed destination tile; `None` while idle.
    pub destination: Option<TileCoord>,
    /// The actor was inactive, so the walker held its tile.
    pub paused:      bool,
}

/// Tallies for one frame's walker update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    pub elapsed_ms: u64,
    pub moved:      u64,
    pub idle:       u64,
    pub paused:     u64,
    pub released:   u64,
    pub orphaned:   u64,
    pub pixels:     u64,
}
