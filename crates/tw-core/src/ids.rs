//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can key maps and sort without
//! ceremony.  `ActorId` is the index of an actor in the SoA actor store;
//! `WalkerId` is handed out sequentially by the walker registry and never
//! reused within a run.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of an actor in `ActorStore`.  Slots are not reused after despawn,
    /// so a stale `ActorId` reliably reports "not alive".
    pub struct ActorId;
}

typed_id! {
    /// Handle of a walker registered in a `WalkerRegistry`.
    pub struct WalkerId;
}
