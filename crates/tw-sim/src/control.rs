//! The `Controller` trait, where AI and player input plug into the loop.
//!
//! Controllers only *request* changes.  They see a read-only
//! [`ControlContext`] and return [`Intent`]s; the frame loop applies them to
//! the registry before any walker moves.

use tw_actor::ActorStore;
use tw_core::{Direction, Frame, WalkerId, WalkerRng};
use tw_map::TileMap;
use tw_walk::{Walker, WalkerRegistry};

// ── Intent ────────────────────────────────────────────────────────────────────

/// A change a controller wants applied to one of its walkers this frame.
///
/// Several intents may be returned for one walker; they are applied in the
/// order given, so `[Face(East), Stop]` leaves the walker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Steer toward `Direction`.  Takes effect at the next tile boundary if
    /// the walker is mid-route.
    Face(Direction),

    /// Change the per-frame pixel budget.  Zero is refused.
    SetSpeed(u32),

    /// Halt at the next tile boundary.  Shorthand for `Face(Direction::Stop)`.
    Stop,

    /// Remove the walker.  Its cells stay marked until the walker update
    /// that follows the apply phase.
    Destroy,
}

// ── ControlContext ────────────────────────────────────────────────────────────

/// Read-only view of the world handed to every [`Controller`] call.
///
/// Built once per frame; all borrows end before the apply phase.
pub struct ControlContext<'a> {
    pub frame:             Frame,
    pub frame_duration_ms: u32,
    pub actors:            &'a ActorStore,
    pub map:               &'a TileMap,
    pub walkers:           &'a WalkerRegistry,
}

impl<'a> ControlContext<'a> {
    #[inline]
    pub fn new(
        frame:             Frame,
        frame_duration_ms: u32,
        actors:            &'a ActorStore,
        map:               &'a TileMap,
        walkers:           &'a WalkerRegistry,
    ) -> Self {
        Self { frame, frame_duration_ms, actors, map, walkers }
    }

    /// Shorthand for `ctx.walkers.get(walker)`.
    #[inline]
    pub fn walker(&self, walker: WalkerId) -> Option<&'a Walker> {
        self.walkers.get(walker)
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Per-frame decision making for walkers.
///
/// Called once per active walker per frame, in update order, with that
/// walker's own [`WalkerRng`].  Drawing only from that RNG keeps runs
/// reproducible for a given seed.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEast;
///
/// impl Controller for AlwaysEast {
///     fn control(&mut self, _w: WalkerId, _ctx: &ControlContext<'_>, _rng: &mut WalkerRng) -> Vec<Intent> {
///         vec![Intent::Face(Direction::East)]
///     }
/// }
/// ```
pub trait Controller {
    fn control(
        &mut self,
        walker: WalkerId,
        ctx:    &ControlContext<'_>,
        rng:    &mut WalkerRng,
    ) -> Vec<Intent>;
}

/// A [`Controller`] that never asks for anything.  Walkers keep whatever
/// direction and speed they were given.
pub struct NoopController;

impl Controller for NoopController {
    fn control(
        &mut self,
        _walker: WalkerId,
        _ctx:    &ControlContext<'_>,
        _rng:    &mut WalkerRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
