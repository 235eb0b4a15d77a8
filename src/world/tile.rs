//! Tile definitions
//!
//! A tile is either passable or a wall carrying the character code it was
//! read from, so maps round-trip exactly.

use serde::{Deserialize, Serialize};

/// Code used for passable tiles in map text
pub const EMPTY_CODE: char = ' ';

/// A single cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Wall of a given kind; the kind is only used for display today
    Wall(char),
}

impl Tile {
    /// Build a tile from its map code
    pub fn from_code(code: char) -> Self {
        if code == EMPTY_CODE {
            Tile::Empty
        } else {
            Tile::Wall(code)
        }
    }

    /// The map code this tile was built from
    pub fn code(&self) -> char {
        match self {
            Tile::Empty => EMPTY_CODE,
            Tile::Wall(code) => *code,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall(_))
    }

    pub fn is_empty(&self) -> bool {
        !self.is_wall()
    }
}

impl From<char> for Tile {
    fn from(code: char) -> Self {
        Tile::from_code(code)
    }
}
