use crate::tiles::{Position, PositionIterator};

/// This struct contains information about the geometry of the board, ie, its size. It does not
/// contain information about piece placement or any other state that would be expected to change
/// over the course of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardGeometry {
    pub side_len: u8
}

impl BoardGeometry {

    /// Create an empty board with the given side length.
    pub fn new(side_len: u8) -> Self {
        Self { side_len }
    }

    /// Check whether the position refers to a square on the board.
    pub fn position_in_bounds(&self, position: Position) -> bool {
        let range = 0..(self.side_len as i16);
        range.contains(&(position.row as i16)) && range.contains(&(position.col as i16))
    }

    /// The row furthest from the fox's starting edge. Reaching it wins the game for the fox.
    pub fn far_edge_row(&self) -> i8 {
        self.side_len as i8 - 1
    }

    /// Return an iterator over all positions on the board.
    pub fn iter_positions(&self) -> PositionIterator {
        PositionIterator::new(self.side_len)
    }
}
