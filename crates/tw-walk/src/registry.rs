//! The `WalkerRegistry`: active walkers, deferred removals, and the
//! two-phase frame update.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tw_actor::ActorStore;
use tw_core::{ActorId, Direction, PixelPos, TileCoord, TwError, WalkerId};
use tw_map::OccupancyGrid;

use crate::step::release_own;
use crate::{StepOutcome, WalkError, WalkResult, Walker, step_walker};

/// A destroyed walker whose grid footprint is released on the next pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PendingRemoval {
    pub walker:      WalkerId,
    pub actor:       ActorId,
    /// Position recorded at destruction, `None` if the walker never had one.
    pub position:    Option<PixelPos>,
    /// Destination the walker had reserved, if it was en route.
    pub destination: Option<TileCoord>,
    /// Tile marked at the end of the walker's last turn.
    pub reserved:    Option<TileCoord>,
}

/// Tallies for one [`WalkerRegistry::update`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PassReport {
    /// Pending removals whose cells were released this pass.
    pub released: usize,
    /// Walkers dropped this pass because their actor was despawned.
    pub orphaned: usize,
    pub paused:   usize,
    pub idle:     usize,
    pub moved:    usize,
    /// Total pixels travelled by all walkers.
    pub pixels:   u64,
}

/// Ordered set of active walkers plus the pending-removal list.
///
/// One registry is one movement context: create it with [`new`](Self::new),
/// attach walkers, and call [`update`](Self::update) once per frame.
/// Walkers are stepped in attach order, and that order decides who wins a
/// contested tile.
///
/// # Deferred removal
///
/// [`destroy`](Self::destroy) takes a walker out of the active set at once
/// but leaves its cells marked.  The *next* `update` clears them in its
/// cleanup phase, before any walker moves.  Cells are never released within
/// the call that recorded the removal.
#[derive(Default)]
pub struct WalkerRegistry {
    walkers:  FxHashMap<WalkerId, Walker>,
    order:    Vec<WalkerId>,
    by_actor: FxHashMap<ActorId, WalkerId>,
    pending:  Vec<PendingRemoval>,
    next_id:  u32,
}

impl WalkerRegistry {
    /// An empty registry with no active or pending walkers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new walker to `actor` with the given initial `speed`.
    ///
    /// The walker starts stopped and idle, and is stepped after every walker
    /// attached before it.
    pub fn attach(&mut self, actor: ActorId, speed: u32, actors: &ActorStore) -> WalkResult<WalkerId> {
        if !actors.is_alive(actor) {
            return Err(TwError::ActorNotFound(actor).into());
        }
        if let Some(&walker) = self.by_actor.get(&actor) {
            return Err(WalkError::AlreadyAttached { actor, walker });
        }
        if speed == 0 {
            return Err(WalkError::ZeroSpeed);
        }

        let id = WalkerId(self.next_id);
        self.next_id += 1;
        self.walkers.insert(id, Walker::new(actor, speed));
        self.order.push(id);
        self.by_actor.insert(actor, id);
        debug!(walker = %id, %actor, speed, "walker attached");
        Ok(id)
    }

    /// Remove `walker` from the active set and queue its cells for release
    /// on the next [`update`](Self::update).
    ///
    /// Returns `false` (and does nothing) if the walker is not active.
    pub fn destroy(&mut self, walker: WalkerId, actors: &ActorStore) -> bool {
        let Some(w) = self.detach(walker) else {
            trace!(%walker, "destroy of inactive walker ignored");
            return false;
        };
        let position = actors.position(w.actor()).or(w.last_position);
        self.enqueue_removal(walker, &w, position);
        true
    }

    pub fn get(&self, walker: WalkerId) -> Option<&Walker> {
        self.walkers.get(&walker)
    }

    pub fn get_mut(&mut self, walker: WalkerId) -> Option<&mut Walker> {
        self.walkers.get_mut(&walker)
    }

    /// The walker attached to `actor`, if any.
    pub fn walker_of(&self, actor: ActorId) -> Option<WalkerId> {
        self.by_actor.get(&actor).copied()
    }

    pub fn set_direction(&mut self, walker: WalkerId, direction: Direction) -> WalkResult<()> {
        let w = self.walkers.get_mut(&walker).ok_or(TwError::WalkerNotFound(walker))?;
        w.direction = direction;
        Ok(())
    }

    pub fn set_speed(&mut self, walker: WalkerId, speed: u32) -> WalkResult<()> {
        if speed == 0 {
            return Err(WalkError::ZeroSpeed);
        }
        let w = self.walkers.get_mut(&walker).ok_or(TwError::WalkerNotFound(walker))?;
        w.speed = speed;
        Ok(())
    }

    /// Number of active walkers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Active walker ids in update order.
    pub fn ids(&self) -> &[WalkerId] {
        &self.order
    }

    /// Active walkers in update order.
    pub fn iter(&self) -> impl Iterator<Item = (WalkerId, &Walker)> + '_ {
        self.order.iter().map(|id| (*id, &self.walkers[id]))
    }

    /// Removals waiting for the next cleanup phase.
    pub fn pending(&self) -> &[PendingRemoval] {
        &self.pending
    }

    /// Advance every walker by one frame.
    ///
    /// Phase 1 sweeps walkers whose actor has been despawned into the
    /// pending list, then releases every pending removal's last tile,
    /// destination and last reservation.  Phase 2 steps all active walkers in
    /// registration order.
    pub fn update<G>(&mut self, actors: &mut ActorStore, grid: &mut G) -> PassReport
    where
        G: OccupancyGrid + ?Sized,
    {
        let mut report = PassReport {
            orphaned: self.sweep_orphans(actors),
            ..PassReport::default()
        };

        // ── Phase 1: cleanup ──────────────────────────────────────────────
        report.released = self.pending.len();
        for removal in self.pending.drain(..) {
            let last_tile = removal.position.map(|p| grid.pixels_to_coords(p));
            let cells = last_tile
                .into_iter()
                .chain(removal.destination)
                .chain(removal.reserved);
            // Only release cells still marked with this walker's actor.
            for tile in cells {
                release_own(grid, tile, removal.actor);
            }
        }

        // ── Phase 2: movement ─────────────────────────────────────────────
        for id in &self.order {
            let Some(walker) = self.walkers.get_mut(id) else {
                continue;
            };
            match step_walker(walker, actors, grid) {
                StepOutcome::Paused => report.paused += 1,
                StepOutcome::Stationary => report.idle += 1,
                StepOutcome::Moved { pixels, .. } => {
                    report.moved += 1;
                    report.pixels += pixels;
                }
                // Swept above; an actor cannot vanish mid-pass.
                StepOutcome::Orphaned => {}
            }
        }

        if report.released > 0 || report.orphaned > 0 {
            debug!(
                released = report.released,
                orphaned = report.orphaned,
                active = self.order.len(),
                "walker cleanup"
            );
        }
        report
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn detach(&mut self, walker: WalkerId) -> Option<Walker> {
        let w = self.walkers.remove(&walker)?;
        self.order.retain(|id| *id != walker);
        self.by_actor.remove(&w.actor());
        Some(w)
    }

    fn enqueue_removal(&mut self, walker: WalkerId, w: &Walker, position: Option<PixelPos>) {
        debug!(%walker, actor = %w.actor(), "walker queued for removal");
        self.pending.push(PendingRemoval {
            walker,
            actor: w.actor(),
            position,
            destination: w.destination(),
            reserved: w.reserved,
        });
    }

    /// Move walkers whose actor is gone into `pending`.  Returns the count.
    fn sweep_orphans(&mut self, actors: &ActorStore) -> usize {
        let orphans: Vec<WalkerId> = self
            .order
            .iter()
            .copied()
            .filter(|id| !actors.is_alive(self.walkers[id].actor()))
            .collect();

        for &walker in &orphans {
            if let Some(w) = self.detach(walker) {
                let position = w.last_position;
                self.enqueue_removal(walker, &w, position);
            }
        }
        orphans.len()
    }
}
