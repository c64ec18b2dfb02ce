//! Walk direction enum shared by the movement core and its controllers.
//!
//! Tile addressing is strictly 4-directional; there are no diagonal variants.

/// The direction a walker has been asked to move in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Hold position (default state).
    #[default]
    Stop,
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The four moving directions, in a fixed order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `true` for any direction other than `Stop`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Stop)
    }

    /// `(d_col, d_row)` step for one tile in this direction.  North is -row.
    #[inline]
    pub fn tile_delta(self) -> (i32, i32) {
        match self {
            Direction::Stop  => (0, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East  => (1, 0),
            Direction::West  => (-1, 0),
        }
    }

    /// The direction pointing the other way.  `Stop` stays `Stop`.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Stop  => Direction::Stop,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East  => Direction::West,
            Direction::West  => Direction::East,
        }
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Stop  => "stop",
            Direction::North => "north",
            Direction::South => "south",
            Direction::East  => "east",
            Direction::West  => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
