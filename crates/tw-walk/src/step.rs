//! One walker's turn within a frame.

use tracing::trace;

use tw_actor::ActorStore;
use tw_core::{ActorId, PixelPos, TileCoord};
use tw_map::OccupancyGrid;

use crate::{WalkState, Walker, adjacent_tile};

/// What happened during a walker's turn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The actor no longer exists.  Nothing was written to the grid.
    Orphaned,
    /// The actor is inactive; it held its tile as a static obstacle.
    Paused,
    /// The walker did not move (stopped, or its first tile was blocked).
    Stationary,
    /// The walker moved `pixels` and reached `arrivals` tile origins.
    Moved { pixels: u64, arrivals: u32 },
}

/// Run the per-frame movement algorithm for `walker`.
///
/// 1. Resolve the actor's current tile.  A paused actor re-marks that tile
///    unless another walker holds it, and stops here.
/// 2. Release last turn's reservation and the current tile, then commit the adjacent tile in `direction`
///    if the walker is idle and that tile is distinct and walkable.
/// 3. Spend `speed` pixels of energy.  Each sub-step moves both axes toward
///    the destination by at most the remaining energy, so a single sub-step
///    may move diagonally.  On exact arrival the walker either stops (energy
///    spent or direction `Stop`), commits the next walkable tile, or
///    blocked-stops.
/// 4. Reserve the destination tile if one is still committed, otherwise the
///    tile under the final position.
pub fn step_walker<G>(walker: &mut Walker, actors: &mut ActorStore, grid: &mut G) -> StepOutcome
where
    G: OccupancyGrid + ?Sized,
{
    let actor = walker.actor();
    let Some(start) = actors.position(actor) else {
        return StepOutcome::Orphaned;
    };
    let current = grid.pixels_to_coords(start);

    if !actors.is_active(actor) {
        // Mid-route the floor tile may already be another walker's destination.
        if grid.occupant_at(current).is_none_or(|held| held == actor) {
            grid.set_occupant_at(current, Some(actor));
        }
        walker.last_position = Some(start);
        return StepOutcome::Paused;
    }

    // A fast walker may have run past last turn's reservation, so it is
    // released separately from the tile underfoot.
    for tile in walker.reserved.take().into_iter().chain([current]) {
        release_own(grid, tile, actor);
    }

    if walker.state == WalkState::Idle && walker.direction.is_moving() {
        let next = adjacent_tile(current, walker.direction, grid.bounds());
        if next != current && grid.is_walkable_at(next) {
            walker.state = WalkState::EnRoute(next);
        }
    }

    let mut pos = start;
    let mut energy = i64::from(walker.speed);
    let mut pixels = 0u64;
    let mut arrivals = 0u32;

    while energy > 0 {
        let WalkState::EnRoute(dst) = walker.state else {
            break;
        };
        let target = grid.coords_to_pixels(dst);

        let dx = i64::from(target.x.abs_diff(pos.x)).min(energy);
        let dy = i64::from(target.y.abs_diff(pos.y)).min(energy);
        pos = PixelPos::new(
            toward(pos.x, target.x, dx),
            toward(pos.y, target.y, dy),
        );
        energy -= dx + dy;
        pixels += (dx + dy).unsigned_abs();

        if pos == target {
            arrivals += 1;
            walker.state = next_state(walker, dst, energy, grid);
        }
    }

    actors.position[actor.index()] = pos;
    walker.last_position = Some(pos);

    let footprint = walker
        .destination()
        .unwrap_or_else(|| grid.pixels_to_coords(pos));
    grid.set_occupant_at(footprint, Some(actor));
    walker.reserved = Some(footprint);

    trace!(%actor, from = %start, to = %pos, %footprint, pixels, arrivals, "walker stepped");

    if pixels == 0 {
        StepOutcome::Stationary
    } else {
        StepOutcome::Moved { pixels, arrivals }
    }
}

/// State after arriving exactly at `dst` with `energy` left.
fn next_state<G>(walker: &Walker, dst: TileCoord, energy: i64, grid: &G) -> WalkState
where
    G: OccupancyGrid + ?Sized,
{
    if energy <= 0 || !walker.direction.is_moving() {
        return WalkState::Idle;
    }
    let next = adjacent_tile(dst, walker.direction, grid.bounds());
    // At a clamped edge `next == dst`, which would never make progress.
    if next != dst && grid.is_walkable_at(next) {
        WalkState::EnRoute(next)
    } else {
        WalkState::Idle
    }
}

/// Clear `tile` if the grid still names `actor` there.
pub(crate) fn release_own<G>(grid: &mut G, tile: TileCoord, actor: ActorId)
where
    G: OccupancyGrid + ?Sized,
{
    if grid.occupant_at(tile) == Some(actor) {
        grid.set_occupant_at(tile, None);
    }
}

/// `from` moved `delta` pixels toward `to`, never past it.
#[inline]
fn toward(from: i32, to: i32, delta: i64) -> i32 {
    let moved = if to > from {
        i64::from(from) + delta
    } else {
        i64::from(from) - delta
    };
    i32::try_from(moved).unwrap_or(to)
}
