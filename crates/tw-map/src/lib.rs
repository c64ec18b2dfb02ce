//! `tw-map` — tile map, walkability, and occupancy for the `tilewalk` engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`grid`]     | `OccupancyGrid` trait, the seam the movement core uses      |
//! | [`tilemap`]  | `TileMap` (terrain + occupants), `TileGeometry`, `Terrain`   |
//! | [`error`]    | `MapError`, `MapResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod tilemap;


pub use error::{MapError, MapResult};
pub use grid::OccupancyGrid;
pub use tilemap::{Terrain, TileGeometry, TileMap};
