//! Framework error type.
//!
//! Sub-crates define their own error enums; `TwError` covers the cases shared
//! across them and is what application code usually converts into.

use thiserror::Error;

use crate::{ActorId, WalkerId};

/// The top-level error type for `tw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TwError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("walker {0} not found")]
    WalkerNotFound(WalkerId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tw-*` crates.
pub type TwResult<T> = Result<T, TwError>;
