//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced while constructing a `TileMap`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("tile size must be positive, got {width}x{height}")]
    ZeroTileSize { width: i32, height: i32 },

    #[error("map layout is empty")]
    EmptyLayout,

    #[error("layout row {row} has {got} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown glyph {glyph:?} at column {col}, row {row}")]
    UnknownGlyph { glyph: char, col: usize, row: usize },
}

pub type MapResult<T> = Result<T, MapError>;
