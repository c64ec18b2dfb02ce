//! The `Sim` struct and its frame loop.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use tw_actor::ActorStore;
use tw_core::{ActorId, Direction, Frame, FrameClock, PixelPos, SimConfig, WalkerId, WalkerRng};
use tw_map::{OccupancyGrid, TileMap};
use tw_walk::{PassReport, WalkResult, WalkerRegistry};

use crate::{ControlContext, Controller, Intent, SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<C>` owns the actors, the tile map, and the walker registry, and
/// drives the three-phase frame loop:
///
/// 1. **Control**: call [`Controller::control`] for each walker in update
///    order, each with its own [`WalkerRng`].
/// 2. **Apply** (same order): set direction or speed, or destroy.
/// 3. **Walk**: [`WalkerRegistry::update`] releases pending removals
///    and steps every walker.
///
/// A frame is one control pass followed by one registry pass.  An
/// [`Intent::Destroy`] issued in frame N takes the walker out during apply,
/// so its cells are released by frame N's own registry pass, the first one
/// after the destroy.  [`destroy_walker`](Self::destroy_walker) called
/// between frames is released by the next frame's pass.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: Controller> {
    /// Global configuration (total frames, seed, frame duration, …).
    pub config: SimConfig,

    /// Frame clock.  Tracks the current frame and maps it to milliseconds.
    pub clock: FrameClock,

    /// Actor positions and pause state.
    pub actors: ActorStore,

    /// Terrain and occupancy.
    pub map: TileMap,

    /// Active walkers and pending removals.
    pub walkers: WalkerRegistry,

    /// Decides what each walker does every frame.
    pub controller: C,

    /// Per-walker deterministic RNGs, created on first use.
    rngs: FxHashMap<WalkerId, WalkerRng>,
}

impl<C: Controller> Sim<C> {
    pub(crate) fn from_parts(
        config:     SimConfig,
        actors:     ActorStore,
        map:        TileMap,
        walkers:    WalkerRegistry,
        controller: C,
    ) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            actors,
            map,
            walkers,
            controller,
            rngs: FxHashMap::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Spawn an actor at `pos` and attach a stopped walker to it.
    ///
    /// The tile under `pos` must be walkable; it is reserved immediately so
    /// later spawns and moves this frame see it as occupied.
    pub fn spawn_walker(&mut self, pos: PixelPos, speed: u32) -> SimResult<WalkerId> {
        let tile = self.map.pixels_to_coords(pos);
        if !self.map.is_walkable_at(tile) {
            return Err(SimError::Blocked { pos, tile });
        }

        let actor = self.actors.spawn(pos);
        let walker = match self.walkers.attach(actor, speed, &self.actors) {
            Ok(w) => w,
            Err(e) => {
                self.actors.despawn(actor);
                return Err(e.into());
            }
        };
        self.map.set_occupant_at(tile, Some(actor));
        debug!(%walker, %actor, %tile, frame = %self.clock.current_frame, "walker spawned");
        Ok(walker)
    }

    /// Destroy `walker`.  Its cells stay marked until the next walker
    /// update.  Returns `false` if the walker is not active.
    pub fn destroy_walker(&mut self, walker: WalkerId) -> bool {
        self.rngs.remove(&walker);
        self.walkers.destroy(walker, &self.actors)
    }

    /// Despawn `actor` outright.  Any walker still attached to it is swept
    /// and released on the next frame.
    pub fn despawn_actor(&mut self, actor: ActorId) -> bool {
        self.actors.despawn(actor)
    }

    /// The current position of `walker`'s actor.
    pub fn walker_position(&self, walker: WalkerId) -> Option<PixelPos> {
        let w = self.walkers.get(walker)?;
        self.actors.position(w.actor())
    }

    /// Run the simulation from the current frame to `config.end_frame()`.
    ///
    /// Calls observer hooks at every frame boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_frame < self.config.end_frame() {
            self.frame_with(observer);
        }
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores `end_frame`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.frame_with(observer);
        }
        Ok(())
    }

    /// Process one frame without an observer and return its pass report.
    pub fn step(&mut self) -> PassReport {
        let now = self.clock.current_frame;
        let report = self.process_frame(now);
        self.clock.advance();
        report
    }

    // ── Core frame processing ─────────────────────────────────────────────

    fn frame_with<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_frame;
        observer.on_frame_start(now);
        let report = self.process_frame(now);
        observer.on_frame_end(now, &report);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.walkers, &self.actors, &self.map);
        }
        self.clock.advance();
    }

    fn process_frame(&mut self, now: Frame) -> PassReport {
        // ── Phase 1: control (produce) ────────────────────────────────────
        let intents = self.compute_intents(now);

        // ── Phase 2: apply (consume) ──────────────────────────────────────
        for (walker, walker_intents) in intents {
            for intent in walker_intents {
                self.apply_intent(walker, intent, now);
            }
        }

        // ── Phase 3: walk ─────────────────────────────────────────────────
        let report = self.walkers.update(&mut self.actors, &mut self.map);
        if report.orphaned > 0 {
            let walkers = &self.walkers;
            self.rngs.retain(|id, _| walkers.get(*id).is_some());
        }
        report
    }

    /// Ask the controller about every active walker, in update order.
    fn compute_intents(&mut self, now: Frame) -> Vec<(WalkerId, Vec<Intent>)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let seed       = self.config.seed;
        let controller = &mut self.controller;
        let rngs       = &mut self.rngs;
        let ctx = ControlContext::new(
            now,
            self.config.frame_duration_ms,
            &self.actors,
            &self.map,
            &self.walkers,
        );

        self.walkers
            .ids()
            .iter()
            .map(|&walker| {
                let rng = rngs
                    .entry(walker)
                    .or_insert_with(|| WalkerRng::new(seed, walker));
                (walker, controller.control(walker, &ctx, rng))
            })
            .collect()
    }

    fn apply_intent(&mut self, walker: WalkerId, intent: Intent, now: Frame) {
        let result: WalkResult<()> = match intent {
            Intent::Face(direction) => self.walkers.set_direction(walker, direction),
            Intent::SetSpeed(speed) => self.walkers.set_speed(walker, speed),
            Intent::Stop => self.walkers.set_direction(walker, Direction::Stop),
            Intent::Destroy => {
                self.destroy_walker(walker);
                Ok(())
            }
        };
        // Non-fatal: e.g. an earlier Destroy this frame, or a zero speed.
        if let Err(e) = result {
            warn!(%walker, frame = %now, ?intent, error = %e, "intent refused");
        }
    }
}
