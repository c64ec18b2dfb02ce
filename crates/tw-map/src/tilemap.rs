//! Dense tile map: terrain layer plus occupancy layer.
//!
//! # Data layout
//!
//! Both layers are row-major `Vec`s of length `width * height`:
//!
//! ```text
//! terrain[row * width + col]    : static walkability, mutable at runtime
//! occupants[row * width + col]  : at most one ActorId per cell
//! ```
//!
//! A tile is walkable when it is on the map, its terrain is passable, and it
//! has no occupant.

use tracing::trace;

use tw_core::{ActorId, MapBounds, PixelPos, TileCoord};

use crate::{MapError, MapResult, OccupancyGrid};

// ── Terrain ──────────────────────────────────────────────────────────────────

/// What a cell is made of.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
}

impl Terrain {
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, Terrain::Floor)
    }

    fn from_glyph(glyph: char) -> Option<Terrain> {
        match glyph {
            '.' => Some(Terrain::Floor),
            '#' => Some(Terrain::Wall),
            _ => None,
        }
    }
}

// ── TileGeometry ─────────────────────────────────────────────────────────────

/// Tile size and map origin in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGeometry {
    pub tile_width:  i32,
    pub tile_height: i32,
    /// Pixel position of the top-left corner of tile `[0, 0]`.
    pub origin:      PixelPos,
}

impl TileGeometry {
    pub fn new(tile_width: i32, tile_height: i32, origin: PixelPos) -> MapResult<Self> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(MapError::ZeroTileSize { width: tile_width, height: tile_height });
        }
        Ok(Self { tile_width, tile_height, origin })
    }

    /// Square tiles of `size` pixels anchored at the pixel origin.
    pub fn square(size: i32) -> MapResult<Self> {
        Self::new(size, size, PixelPos::default())
    }
}

// ── TileMap ──────────────────────────────────────────────────────────────────

/// The concrete [`OccupancyGrid`] used by the simulation driver.
pub struct TileMap {
    geometry:  TileGeometry,
    bounds:    MapBounds,
    terrain:   Vec<Terrain>,
    occupants: Vec<Option<ActorId>>,
}

impl TileMap {
    /// An all-floor map of `bounds` tiles.
    pub fn new(bounds: MapBounds, geometry: TileGeometry) -> Self {
        let area = bounds.area();
        Self {
            geometry,
            bounds,
            terrain:   vec![Terrain::Floor; area],
            occupants: vec![None; area],
        }
    }

    /// Parse a text layout: one line per row, `.` for floor and `#` for wall.
    ///
    /// Leading and trailing blank lines are ignored and each line is trimmed,
    /// so layouts can be written as indented string literals.
    pub fn from_ascii(layout: &str, geometry: TileGeometry) -> MapResult<Self> {
        let lines: Vec<&str> = layout.lines().map(str::trim).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(MapError::EmptyLayout),
        };
        let width = rows[0].chars().count();

        let mut terrain = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(MapError::RaggedRow { row, expected: width, got });
            }
            for (col, glyph) in line.chars().enumerate() {
                let t = Terrain::from_glyph(glyph)
                    .ok_or(MapError::UnknownGlyph { glyph, col, row })?;
                terrain.push(t);
            }
        }

        let bounds = MapBounds::new(width as i32, rows.len() as i32);
        Ok(Self {
            geometry,
            bounds,
            occupants: vec![None; terrain.len()],
            terrain,
        })
    }

    #[inline]
    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }

    /// Terrain at `tile`, `None` off the map.
    pub fn terrain_at(&self, tile: TileCoord) -> Option<Terrain> {
        self.bounds.linear_index(tile).map(|i| self.terrain[i])
    }

    /// Change the terrain of `tile`.  Returns `false` for off-map tiles.
    ///
    /// Walling off a cell does not evict its occupant; walkers already
    /// committed to it still arrive.
    pub fn set_terrain(&mut self, tile: TileCoord, terrain: Terrain) -> bool {
        match self.bounds.linear_index(tile) {
            Some(i) => {
                self.terrain[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// `true` if `tile` is on the map and its terrain is passable, ignoring
    /// occupancy.
    pub fn is_passable(&self, tile: TileCoord) -> bool {
        self.terrain_at(tile).is_some_and(Terrain::is_passable)
    }

    /// All occupied tiles and their occupants, in row-major order.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = (TileCoord, ActorId)> + '_ {
        let width = self.bounds.width.max(1);
        self.occupants.iter().enumerate().filter_map(move |(i, occ)| {
            occ.map(|actor| {
                let i = i as i32;
                (TileCoord::new(i % width, i / width), actor)
            })
        })
    }

    /// Tile currently holding `actor`, if any.
    pub fn tile_of(&self, actor: ActorId) -> Option<TileCoord> {
        self.occupied_tiles().find(|(_, a)| *a == actor).map(|(t, _)| t)
    }

    /// Forget every occupant.
    pub fn clear_occupants(&mut self) {
        self.occupants.fill(None);
    }
}

impl OccupancyGrid for TileMap {
    #[inline]
    fn pixels_to_coords(&self, pos: PixelPos) -> TileCoord {
        let g = &self.geometry;
        TileCoord::new(
            (pos.x - g.origin.x).div_euclid(g.tile_width),
            (pos.y - g.origin.y).div_euclid(g.tile_height),
        )
    }

    #[inline]
    fn coords_to_pixels(&self, tile: TileCoord) -> PixelPos {
        let g = &self.geometry;
        PixelPos::new(
            tile.col * g.tile_width + g.origin.x,
            tile.row * g.tile_height + g.origin.y,
        )
    }

    #[inline]
    fn bounds(&self) -> MapBounds {
        self.bounds
    }

    #[inline]
    fn occupant_at(&self, tile: TileCoord) -> Option<ActorId> {
        self.bounds.linear_index(tile).and_then(|i| self.occupants[i])
    }

    fn set_occupant_at(&mut self, tile: TileCoord, occupant: Option<ActorId>) {
        match self.bounds.linear_index(tile) {
            Some(i) => self.occupants[i] = occupant,
            None => trace!(%tile, "ignoring occupancy write off the map"),
        }
    }

    #[inline]
    fn is_walkable_at(&self, tile: TileCoord) -> bool {
        self.bounds
            .linear_index(tile)
            .is_some_and(|i| self.terrain[i].is_passable() && self.occupants[i].is_none())
    }
}
