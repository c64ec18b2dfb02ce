//! The `Walker` entity.

use tw_core::{ActorId, Direction, PixelPos, TileCoord};

use crate::WalkState;

/// Movement state for one actor.
///
/// `direction` and `speed` are set by controllers between frames.  The
/// destination is private: it only changes inside the stepping algorithm, so
/// it is always a tile that was walkable when committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    /// Requested direction.  `Stop` halts at the next tile boundary.
    pub direction: Direction,

    /// Pixel budget per frame.  Always positive when set through the
    /// registry.
    pub speed: u32,

    actor: ActorId,
    pub(crate) state: WalkState,

    /// Where the actor stood at the end of this walker's last turn.
    pub(crate) last_position: Option<PixelPos>,

    /// Tile marked at the end of this walker's last turn.
    pub(crate) reserved: Option<TileCoord>,
}

impl Walker {
    /// A stopped, idle walker bound to `actor`.
    pub fn new(actor: ActorId, speed: u32) -> Self {
        Self {
            direction: Direction::Stop,
            speed,
            actor,
            state: WalkState::Idle,
            last_position: None,
            reserved: None,
        }
    }

    /// The owning actor (non-owning reference).
    #[inline]
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    #[inline]
    pub fn state(&self) -> WalkState {
        self.state
    }

    #[inline]
    pub fn destination(&self) -> Option<TileCoord> {
        self.state.destination()
    }
}
