use thiserror::Error;

use tw_core::{PixelPos, TileCoord, TwError};
use tw_map::MapError;
use tw_walk::WalkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot place walker at {pos}: tile {tile} is not walkable")]
    Blocked { pos: PixelPos, tile: TileCoord },

    #[error(transparent)]
    Core(#[from] TwError),

    #[error("map error: {0}")]
    Map(#[from] MapError),

    #[error("walker error: {0}")]
    Walk(#[from] WalkError),
}

pub type SimResult<T> = Result<T, SimError>;
