//! Fluent builder for constructing a [`Sim`].

use rustc_hash::FxHashSet;

use tw_actor::ActorStoreBuilder;
use tw_core::{Direction, PixelPos, SimConfig};
use tw_map::{OccupancyGrid, TileMap};
use tw_walk::WalkerRegistry;

use crate::{Controller, Sim, SimError, SimResult};

/// One walker requested through [`SimBuilder::walker`].
struct WalkerStart {
    pos:       PixelPos,
    speed:     u32,
    direction: Direction,
}

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total frames, seed, frame duration, …
/// - [`TileMap`]: terrain; any occupants it carries are cleared
/// - `C: Controller`: the control implementation
///
/// # Optional inputs
///
/// | Method                       | Default           |
/// |------------------------------|-------------------|
/// | `.walker(pos, speed)`        | no walkers        |
/// | `.walker_facing(pos, s, d)`  | no walkers        |
///
/// Walkers are registered, and therefore updated, in the order they are
/// added.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, map, WanderController::default())
///     .walker(PixelPos::new(16, 16), 4)
///     .walker_facing(PixelPos::new(48, 16), 4, Direction::West)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: Controller> {
    config:     SimConfig,
    map:        TileMap,
    controller: C,
    walkers:    Vec<WalkerStart>,
}

impl<C: Controller> SimBuilder<C> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, map: TileMap, controller: C) -> Self {
        Self { config, map, controller, walkers: Vec::new() }
    }

    /// Add a stopped walker at `pos`.
    pub fn walker(self, pos: PixelPos, speed: u32) -> Self {
        self.walker_facing(pos, speed, Direction::Stop)
    }

    /// Add a walker at `pos` already heading in `direction`.
    pub fn walker_facing(mut self, pos: PixelPos, speed: u32, direction: Direction) -> Self {
        self.walkers.push(WalkerStart { pos, speed, direction });
        self
    }

    /// Validate inputs, place every walker, and return a ready-to-run
    /// [`Sim`].
    ///
    /// Fails if the config is invalid, or if any walker starts on a tile that
    /// is off the map, impassable, or shared with an earlier walker.
    pub fn build(mut self) -> SimResult<Sim<C>> {
        self.config.validate()?;
        self.map.clear_occupants();

        // ── Validate initial positions ────────────────────────────────────
        let mut taken = FxHashSet::default();
        for start in &self.walkers {
            let tile = self.map.pixels_to_coords(start.pos);
            if !self.map.is_walkable_at(tile) || !taken.insert(tile) {
                return Err(SimError::Blocked { pos: start.pos, tile });
            }
        }

        // ── Spawn actors, attach walkers, mark occupancy ──────────────────
        let (actors, ids) = self
            .walkers
            .iter()
            .fold(ActorStoreBuilder::new(), |b, start| b.actor(start.pos))
            .build();

        let mut registry = WalkerRegistry::new();
        for (start, &actor) in self.walkers.iter().zip(&ids) {
            let walker = registry.attach(actor, start.speed, &actors)?;
            registry.set_direction(walker, start.direction)?;
            let tile = self.map.pixels_to_coords(start.pos);
            self.map.set_occupant_at(tile, Some(actor));
        }

        Ok(Sim::from_parts(self.config, actors, self.map, registry, self.controller))
    }
}
