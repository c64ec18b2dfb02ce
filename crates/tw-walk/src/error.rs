use thiserror::Error;
use tw_core::{ActorId, TwError, WalkerId};

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("actor {actor} already has walker {walker}")]
    AlreadyAttached { actor: ActorId, walker: WalkerId },

    #[error("walker speed must be positive")]
    ZeroSpeed,

    #[error(transparent)]
    Core(#[from] TwError),
}

pub type WalkResult<T> = Result<T, WalkError>;
