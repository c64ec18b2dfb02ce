//! The `OccupancyGrid` trait.

use tw_core::{ActorId, MapBounds, PixelPos, TileCoord};

/// Everything the movement core needs from a tile map.
///
/// Implemented by [`TileMap`][crate::TileMap]; tests and embedders can supply
/// their own.  Implementations must keep at most one occupant per tile and
/// must report a tile as unwalkable while it has an occupant, otherwise
/// walkers cannot keep each other out of shared cells.
pub trait OccupancyGrid {
    /// Tile containing the pixel `pos`.
    fn pixels_to_coords(&self, pos: PixelPos) -> TileCoord;

    /// Pixel position of the top-left corner of `tile`.
    fn coords_to_pixels(&self, tile: TileCoord) -> PixelPos;

    /// Map extent in tiles, used for clamping adjacent-tile lookups.
    fn bounds(&self) -> MapBounds;

    fn occupant_at(&self, tile: TileCoord) -> Option<ActorId>;

    /// Set or clear the occupant of `tile`.  Off-map tiles are ignored.
    fn set_occupant_at(&mut self, tile: TileCoord, occupant: Option<ActorId>);

    /// `true` if a walker may commit to entering `tile` right now.
    fn is_walkable_at(&self, tile: TileCoord) -> bool;
}
