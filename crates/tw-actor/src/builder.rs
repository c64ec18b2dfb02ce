//! Fluent builder for an `ActorStore` populated up front.
//!
//! # Usage
//!
//! ```rust
//! use tw_actor::ActorStoreBuilder;
//! use tw_core::PixelPos;
//!
//! let (store, ids) = ActorStoreBuilder::new()
//!     .actor(PixelPos::new(0, 0))
//!     .paused_actor(PixelPos::new(32, 16))
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.is_active(ids[0]));
//! assert!(!store.is_active(ids[1]));
//! ```

use tw_core::{ActorId, PixelPos};

use crate::{ActorState, ActorStore};

/// Collects initial actors, then builds the store in one pass.
#[derive(Default)]
pub struct ActorStoreBuilder {
    initial: Vec<(PixelPos, ActorState)>,
}

impl ActorStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active actor at `position`.
    pub fn actor(mut self, position: PixelPos) -> Self {
        self.initial.push((position, ActorState::Active));
        self
    }

    /// Add an inactive (paused) actor at `position`.
    pub fn paused_actor(mut self, position: PixelPos) -> Self {
        self.initial.push((position, ActorState::Inactive));
        self
    }

    /// Construct the store.  Returned ids are in the order actors were added.
    pub fn build(self) -> (ActorStore, Vec<ActorId>) {
        let mut store = ActorStore::new();
        store.position.reserve(self.initial.len());
        store.state.reserve(self.initial.len());

        let ids = self
            .initial
            .into_iter()
            .map(|(pos, state)| store.spawn_with_state(pos, state))
            .collect();

        (store, ids)
    }
}
