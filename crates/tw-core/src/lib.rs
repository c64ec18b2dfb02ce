//! `tw-core` — foundational types for the `tilewalk` movement engine.
//!
//! This crate is a dependency of every other `tw-*` crate.  It has no `tw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`, `WalkerId`                                 |
//! | [`tile`]        | `TileCoord`, `PixelPos`, `MapBounds`                  |
//! | [`direction`]   | `Direction` enum (STOP + four cardinals)              |
//! | [`time`]        | `Frame`, `FrameClock`, `SimConfig`                    |
//! | [`rng`]         | `WalkerRng` (per-walker deterministic RNG)            |
//! | [`error`]       | `TwError`, `TwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tile;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{TwError, TwResult};
pub use ids::{ActorId, WalkerId};
pub use rng::WalkerRng;
pub use tile::{MapBounds, PixelPos, TileCoord};
pub use time::{Frame, FrameClock, SimConfig};
