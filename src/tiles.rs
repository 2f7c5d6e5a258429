use crate::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// A row-column pair identifying a square. A `Position` is not tied to any particular board, so it
/// may refer to a location off the board, including one with negative row or column values;
/// whether it is on the board is for the game state to decide.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8
}

impl Position {

    /// Create a new [`Position`] with the given row and column.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Return the position reached by taking a single step in the given direction. This never
    /// fails, and the result may well be off the board.
    pub fn move_to(&self, direction: impl Direction) -> Self {
        Self {
            row: self.row.saturating_add(direction.row_delta()),
            col: self.col.saturating_add(direction.col_delta())
        }
    }

    /// The `(row, col)` delta that leads from `origin` to this position. Deltas too large for an
    /// `i8` are clamped, which never matches a single step.
    pub fn delta_from(&self, origin: Position) -> (i8, i8) {
        (self.row.saturating_sub(origin.row), self.col.saturating_sub(origin.col))
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position(row={}, col={})", self.row, self.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i8, i8) {
    fn from(value: Position) -> Self {
        (value.row, value.col)
    }
}

/// Iterator over all positions on a board, in row-major order.
pub struct PositionIterator {
    side_len: u8,
    current_row: u8,
    current_col: u8
}

impl PositionIterator {
    pub(crate) fn new(side_len: u8) -> Self {
        Self {
            side_len,
            current_row: 0,
            current_col: 0
        }
    }
}

impl Iterator for PositionIterator {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.side_len {
            return None
        }
        let position = Position::new(self.current_row as i8, self.current_col as i8);
        if self.current_col >= self.side_len - 1 {
            self.current_row += 1;
            self.current_col = 0;
        } else {
            self.current_col += 1;
        }
        Some(position)
    }
}
