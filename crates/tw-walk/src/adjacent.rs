//! One-step tile lookup.

use tw_core::{Direction, MapBounds, TileCoord};

/// The tile one step from `tile` in `direction`, saturated to `bounds`.
///
/// North/South move the row by ∓1, East/West move the column by ±1, `Stop`
/// returns `tile` unchanged.  Each axis is clamped to `[0, bounds.height]` /
/// `[0, bounds.width]` (see [`MapBounds::clamp`]), so walking off an edge
/// silently yields the edge tile (or the off-map tile just past the far
/// edge, which no grid reports as walkable).
#[inline]
pub fn adjacent_tile(tile: TileCoord, direction: Direction, bounds: MapBounds) -> TileCoord {
    let (d_col, d_row) = direction.tile_delta();
    bounds.clamp(tile.offset(d_col, d_row))
}
