//! Tile and pixel coordinate types.
//!
//! Tiles are addressed by integer `(col, row)`; actors live in integer pixel
//! space.  Conversion between the two needs the tile size and map origin, so
//! it lives on the grid (`tw_map::OccupancyGrid`), not here.

use std::fmt;

/// A grid cell addressed by column and row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The tile `(d_col, d_row)` away from `self`, without any clamping.
    #[inline]
    pub fn offset(self, d_col: i32, d_row: i32) -> Self {
        Self::new(self.col + d_col, self.row + d_row)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// An absolute position in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance in pixels.
    #[inline]
    pub fn manhattan(self, other: PixelPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Map extent in tiles.
///
/// The map covers columns `0..width` and rows `0..height`.  Note that
/// [`clamp`](Self::clamp) saturates to the *inclusive* range `[0, width]` ×
/// `[0, height]`, so it can yield a tile one past the last column or row.
/// Such tiles fail [`contains`](Self::contains) and are therefore never
/// walkable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub width:  i32,
    pub height: i32,
}

impl MapBounds {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Saturate `tile` into `[0, width]` × `[0, height]`.
    #[inline]
    pub fn clamp(self, tile: TileCoord) -> TileCoord {
        TileCoord::new(
            tile.col.clamp(0, self.width.max(0)),
            tile.row.clamp(0, self.height.max(0)),
        )
    }

    /// `true` if `tile` addresses a real cell of the map.
    #[inline]
    pub fn contains(self, tile: TileCoord) -> bool {
        (0..self.width).contains(&tile.col) && (0..self.height).contains(&tile.row)
    }

    /// Number of cells on the map.
    #[inline]
    pub fn area(self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Row-major index of `tile`, or `None` if it is off the map.
    #[inline]
    pub fn linear_index(self, tile: TileCoord) -> Option<usize> {
        self.contains(tile)
            .then(|| tile.row as usize * self.width as usize + tile.col as usize)
    }
}
