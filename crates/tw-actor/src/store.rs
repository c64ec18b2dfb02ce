//! Core actor storage.
//!
//! Every `Vec` field is indexed by `ActorId`.  Despawned slots are kept (with
//! `alive = false`) rather than compacted, so ids handed to walkers stay
//! stable and a stale id reliably reads as "gone".

use tw_core::{ActorId, PixelPos, TwError, TwResult};

/// Whether an actor takes part in the current frame.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorState {
    #[default]
    Active,
    /// Paused: a walker bound to this actor does not move and behaves as a
    /// static obstacle.
    Inactive,
}

/// Structure-of-Arrays storage for all actors.
///
/// ```ignore
/// let pos = store.position[actor.index()];  // O(1), cache-friendly
/// ```
#[derive(Debug, Default)]
pub struct ActorStore {
    /// Absolute pixel position of each actor.
    pub position: Vec<PixelPos>,

    /// Activity flag of each actor.
    pub state: Vec<ActorState>,

    /// `false` once the actor has been despawned.
    alive: Vec<bool>,

    live_count: usize,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active actor at `position`.
    pub fn spawn(&mut self, position: PixelPos) -> ActorId {
        self.spawn_with_state(position, ActorState::Active)
    }

    pub fn spawn_with_state(&mut self, position: PixelPos, state: ActorState) -> ActorId {
        let id = ActorId(self.position.len() as u32);
        self.position.push(position);
        self.state.push(state);
        self.alive.push(true);
        self.live_count += 1;
        id
    }

    /// Mark `actor` as gone.  Returns `false` if it was already despawned or
    /// never existed.
    pub fn despawn(&mut self, actor: ActorId) -> bool {
        match self.alive.get_mut(actor.index()) {
            Some(alive) if *alive => {
                *alive = false;
                self.live_count -= 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_alive(&self, actor: ActorId) -> bool {
        self.alive.get(actor.index()).copied().unwrap_or(false)
    }

    /// Current pixel position, `None` for despawned actors.
    #[inline]
    pub fn position(&self, actor: ActorId) -> Option<PixelPos> {
        self.is_alive(actor).then(|| self.position[actor.index()])
    }

    pub fn set_position(&mut self, actor: ActorId, position: PixelPos) -> TwResult<()> {
        if !self.is_alive(actor) {
            return Err(TwError::ActorNotFound(actor));
        }
        self.position[actor.index()] = position;
        Ok(())
    }

    /// Activity flag, `None` for despawned actors.
    #[inline]
    pub fn state(&self, actor: ActorId) -> Option<ActorState> {
        self.is_alive(actor).then(|| self.state[actor.index()])
    }

    pub fn set_state(&mut self, actor: ActorId, state: ActorState) -> TwResult<()> {
        if !self.is_alive(actor) {
            return Err(TwError::ActorNotFound(actor));
        }
        self.state[actor.index()] = state;
        Ok(())
    }

    /// `true` if the actor exists and is not paused.
    #[inline]
    pub fn is_active(&self, actor: ActorId) -> bool {
        self.state(actor) == Some(ActorState::Active)
    }

    /// Number of live actors.
    #[inline]
    pub fn len(&self) -> usize {
        self.live_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterator over live `ActorId`s in ascending index order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| ActorId(i as u32))
    }
}
