//! Per-walker movement state.

use tw_core::TileCoord;

/// Whether a walker has a committed destination.
///
/// `EnRoute` is only ever entered after the destination tile was checked
/// walkable, and it is not re-validated until the walker arrives.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum WalkState {
    /// No destination; the walker stands on the tile under its position.
    #[default]
    Idle,
    /// Moving toward the given tile.
    EnRoute(TileCoord),
}

impl WalkState {
    #[inline]
    pub fn destination(self) -> Option<TileCoord> {
        match self {
            WalkState::Idle => None,
            WalkState::EnRoute(tile) => Some(tile),
        }
    }

    #[inline]
    pub fn is_en_route(self) -> bool {
        matches!(self, WalkState::EnRoute(_))
    }
}
