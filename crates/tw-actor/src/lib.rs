//! `tw-actor` — Structure-of-Arrays actor storage for the `tilewalk` engine.
//!
//! The movement core only needs three things from an actor: a mutable pixel
//! position, an active/inactive flag, and whether the actor still exists.
//! This crate provides exactly that and nothing more.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`store`]     | `ActorStore` (SoA arrays), `ActorState`                   |
//! | [`builder`]   | `ActorStoreBuilder` (fluent construction)                 |

pub mod builder;
pub mod store;


pub use builder::ActorStoreBuilder;
pub use store::{ActorState, ActorStore};
