//! `tw-sim` — frame loop driver for the `tilewalk` engine.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Control: call Controller::control for each walker in update order;
//!               every walker gets its own WalkerRng.
//!   ② Apply:   for each walker's intents, in update order:
//!                 Face(dir)     → set direction
//!                 SetSpeed(s)   → set speed (zero is refused)
//!                 Stop          → set direction to Stop
//!                 Destroy       → queue the walker for removal; its
//!                                 cells are released in ③
//!   ③ Walk:    WalkerRegistry::update: release pending removals, then
//!               step every walker.
//! ```
//!
//! Intents aimed at a walker that no longer exists are logged and dropped.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tw_core::{PixelPos, SimConfig};
//! use tw_map::{TileGeometry, TileMap};
//! use tw_sim::{NoopController, NoopObserver, SimBuilder};
//!
//! let map = TileMap::from_ascii(LAYOUT, TileGeometry::square(16)?)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), map, NoopController)
//!     .walker(PixelPos::new(0, 0), 4)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use control::{ControlContext, Controller, Intent, NoopController};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
