use thiserror::Error;
use crate::pieces::Side;
use crate::tiles::Position;

/// Errors relating to the board and the pieces on it.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum BoardError {
    /// The given piece index does not refer to any piece in the game.
    #[error("no piece with index {0}")]
    InvalidIndex(usize),
}

/// Errors that may be encountered when translating a row/column delta into a direction.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum DirectionError {
    /// The delta does not match any direction available to the given side.
    #[error("unrecognized direction ({row_delta}, {col_delta}) for {side:?}")]
    Unrecognized {
        side: Side,
        row_delta: i8,
        col_delta: i8
    }
}

/// Reasons why a game could not be set up from a given configuration.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum SetupError {
    /// The board is too small to hold the standard layout. The given `u8` is the requested size.
    #[error("board size {0} is too small")]
    BoardTooSmall(u8),
    /// The board is larger than the occupancy bitfield can represent.
    #[error("board size {size} exceeds the maximum of {max} for this state type")]
    BoardTooLarge { size: u8, max: u8 },
    /// A piece was placed outside the board.
    #[error("piece placed off the board at {0}")]
    OffBoard(Position),
    /// More than one piece was placed on the same square.
    #[error("more than one piece placed at {0}")]
    Overlapping(Position),
    /// There must be exactly one fox. The given `usize` is the number actually found.
    #[error("expected exactly one fox, found {0}")]
    FoxCount(usize),
}

/// Errors that may be encountered when parsing a string.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse a multi-line string but encountered a line that was not the expected length.
    /// The given `usize` is the actual length.
    #[error("line has unexpected length {0}")]
    BadLineLen(usize),
    /// The string was well-formed but describes a layout that is not a legal starting position.
    #[error(transparent)]
    BadSetup(#[from] SetupError),
}

/// Different ways a move can be invalid.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum PlayInvalid {
    /// The given piece index does not refer to any piece in the game.
    #[error("no piece with index {0}")]
    InvalidIndex(usize),
    /// The direction belongs to the other side's direction set.
    #[error("direction does not belong to {0:?} movement")]
    WrongDirectionSet(Side),
    /// The destination would be outside the board.
    #[error("destination is off the board")]
    OutOfBounds,
    /// Another piece occupies the destination.
    #[error("destination is occupied")]
    BlockedByPiece,
    /// The piece being moved does not belong to the side whose turn it is.
    #[error("it is not this piece's turn")]
    WrongPlayer,
    /// Game is already over.
    #[error("game is already over")]
    GameOver,
}

impl From<BoardError> for PlayInvalid {
    fn from(value: BoardError) -> Self {
        match value {
            BoardError::InvalidIndex(i) => PlayInvalid::InvalidIndex(i)
        }
    }
}

/// Reasons why a square could not be selected during a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SelectError {
    /// The square is not a valid origin or destination in the current selection phase.
    #[error("{0} cannot be selected now")]
    NotSelectable(Position),
    /// Game is already over.
    #[error("game is already over")]
    GameOver,
}
