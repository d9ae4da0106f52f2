//! Square grid geometry with (row, column) coordinates
//!
//! Row 0 is the top edge of the board, column 0 the left edge.

use serde::{Deserialize, Serialize};

/// Board width and height in tiles
pub const BOARD_SIZE: i8 = 8;

/// A board coordinate. May lie off the board after applying a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub row: i8,
    pub col: i8,
}

impl Tile {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this tile is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Tile one step away in `direction`, without a board bounds check.
    /// `None` only when the coordinate would leave the `i8` range.
    pub fn step(&self, direction: Direction) -> Option<Tile> {
        let (dr, dc) = direction.vector();
        Some(Tile::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// `[row, col]` pair used by the snapshot format
    pub fn to_pair(self) -> [i8; 2] {
        [self.row, self.col]
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Cardinal direction of a single-step move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Direction vectors (d_row, d_col), indexed N, E, S, W
pub const DIRECTIONS: [(i8, i8); 4] = [
    (-1, 0), // N
    (0, 1),  // E
    (1, 0),  // S
    (0, -1), // W
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse the single-letter command form (N, E, S, W)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn vector(self) -> (i8, i8) {
        DIRECTIONS[self as usize]
    }
}
