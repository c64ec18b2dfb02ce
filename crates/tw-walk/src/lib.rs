//! `tw-walk` — per-frame tile movement and occupancy resolution.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`adjacent`]  | `adjacent_tile`, clamped one-step tile lookup                  |
//! | [`state`]     | `WalkState`: `Idle` / `EnRoute(tile)`                          |
//! | [`walker`]    | `Walker`: direction, speed, state, owning actor                |
//! | [`step`]      | `step_walker`: one walker's turn within a frame                |
//! | [`registry`]  | `WalkerRegistry`: ordered active set + deferred removals       |
//! | [`error`]     | `WalkError`, `WalkResult<T>`                                    |
//!
//! # Movement model (energy budget)
//!
//! Each frame a walker receives `speed` pixels of energy.  It spends them
//! moving toward its committed destination tile; on exact arrival with
//! energy left it commits the next tile in its direction (only if walkable)
//! and keeps going.  A fast walker can therefore cross several tiles per
//! frame, but every tile it enters was checked before it committed.
//!
//! # Frame order
//!
//! [`WalkerRegistry::update`] runs two phases:
//!
//! 1. **Cleanup**: release grid cells of walkers destroyed since the last
//!    pass (and of walkers whose actor has been despawned).
//! 2. **Movement**: step every active walker in registration order.  Earlier
//!    walkers win contested tiles.

pub mod adjacent;
pub mod error;
pub mod registry;
pub mod state;
pub mod step;
pub mod walker;


pub use adjacent::adjacent_tile;
pub use error::{WalkError, WalkResult};
pub use registry::{PassReport, PendingRemoval, WalkerRegistry};
pub use state::WalkState;
pub use step::{StepOutcome, step_walker};
pub use walker::Walker;
