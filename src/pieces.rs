use crate::direction::Direction;
use crate::error::ParseError;
use crate::error::ParseError::BadChar;
use crate::pieces::Side::{Dog, Fox};
use crate::tiles::Position;
use serde::{Deserialize, Serialize};

/// The two sides of the game. There is only ever one fox, but any number of dogs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Dog,
    Fox
}

impl Side {

    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            Dog => Fox,
            Fox => Dog
        }
    }
}

impl From<Side> for char {
    /// A single-character representation of a piece of the given side.
    fn from(value: Side) -> Self {
        match value {
            Fox => 'F',
            Dog => 'D'
        }
    }
}

impl TryFrom<char> for Side {
    type Error = ParseError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'F' => Ok(Fox),
            'D' => Ok(Dog),
            _ => Err(BadChar(value))
        }
    }
}

/// A piece on the board. The position is the only part of a piece that changes over a game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub position: Position
}

impl Piece {
    /// Create a new piece of the given side at the given position.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }

    /// Create a new fox at the given position.
    pub fn fox(position: Position) -> Self {
        Self::new(Fox, position)
    }

    /// Create a new dog at the given position.
    pub fn dog(position: Position) -> Self {
        Self::new(Dog, position)
    }

    /// Move the piece one step in the given direction. This does no bounds or collision checking;
    /// that is left to the game state.
    pub fn move_to(&mut self, direction: impl Direction) {
        self.position = self.position.move_to(direction);
    }

    pub fn is_fox(&self) -> bool {
        self.side == Fox
    }
}
