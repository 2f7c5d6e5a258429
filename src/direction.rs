use crate::error::DirectionError;
use crate::pieces::Side;
use serde::{Deserialize, Serialize};

/// A single-step movement, expressed as a change in row and column. Rows increase "downwards",
/// ie, away from the fox's starting edge and towards the dogs' back rank.
pub trait Direction: Copy {
    /// Change in row.
    fn row_delta(&self) -> i8;
    /// Change in column.
    fn col_delta(&self) -> i8;
}

/// The directions in which the fox may move: one square along any diagonal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FoxDirection {
    UpLeft,
    UpRight,
    DownRight,
    DownLeft
}

impl FoxDirection {

    /// All fox directions.
    pub const ALL: [FoxDirection; 4] = [
        FoxDirection::UpLeft,
        FoxDirection::UpRight,
        FoxDirection::DownRight,
        FoxDirection::DownLeft
    ];

    /// Find the fox direction with exactly the given deltas.
    pub fn from_delta(row_delta: i8, col_delta: i8) -> Result<Self, DirectionError> {
        Self::ALL.into_iter()
            .find(|d| d.row_delta() == row_delta && d.col_delta() == col_delta)
            .ok_or(DirectionError::Unrecognized { side: Side::Fox, row_delta, col_delta })
    }
}

impl Direction for FoxDirection {
    fn row_delta(&self) -> i8 {
        match self {
            FoxDirection::UpLeft | FoxDirection::UpRight => -1,
            FoxDirection::DownRight | FoxDirection::DownLeft => 1
        }
    }

    fn col_delta(&self) -> i8 {
        match self {
            FoxDirection::UpLeft | FoxDirection::DownLeft => -1,
            FoxDirection::UpRight | FoxDirection::DownRight => 1
        }
    }
}

/// The directions in which a dog may move: one square diagonally forward. Dogs can never move
/// backwards or sideways.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DogDirection {
    UpLeft,
    UpRight
}

impl DogDirection {

    /// All dog directions.
    pub const ALL: [DogDirection; 2] = [DogDirection::UpLeft, DogDirection::UpRight];

    /// Find the dog direction with exactly the given deltas.
    pub fn from_delta(row_delta: i8, col_delta: i8) -> Result<Self, DirectionError> {
        Self::ALL.into_iter()
            .find(|d| d.row_delta() == row_delta && d.col_delta() == col_delta)
            .ok_or(DirectionError::Unrecognized { side: Side::Dog, row_delta, col_delta })
    }
}

impl Direction for DogDirection {
    fn row_delta(&self) -> i8 {
        -1
    }

    fn col_delta(&self) -> i8 {
        match self {
            DogDirection::UpLeft => -1,
            DogDirection::UpRight => 1
        }
    }
}

/// A direction tagged with the side whose direction set it comes from. This is what the game state
/// hands out as a legal move, and what it expects back when a move is applied, so that a fox can
/// never be moved with a dog direction or vice versa.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PieceDirection {
    Fox(FoxDirection),
    Dog(DogDirection)
}

impl PieceDirection {

    /// The side whose direction set this direction belongs to.
    pub fn side(&self) -> Side {
        match self {
            PieceDirection::Fox(_) => Side::Fox,
            PieceDirection::Dog(_) => Side::Dog
        }
    }

    /// All directions available to the given side.
    pub fn all_for(side: Side) -> Vec<PieceDirection> {
        match side {
            Side::Fox => FoxDirection::ALL.into_iter().map(PieceDirection::Fox).collect(),
            Side::Dog => DogDirection::ALL.into_iter().map(PieceDirection::Dog).collect()
        }
    }

    /// Look up the deltas in the direction set of the given side.
    pub fn from_delta(side: Side, row_delta: i8, col_delta: i8) -> Result<Self, DirectionError> {
        match side {
            Side::Fox => FoxDirection::from_delta(row_delta, col_delta).map(PieceDirection::Fox),
            Side::Dog => DogDirection::from_delta(row_delta, col_delta).map(PieceDirection::Dog)
        }
    }
}

impl Direction for PieceDirection {
    fn row_delta(&self) -> i8 {
        match self {
            PieceDirection::Fox(d) => d.row_delta(),
            PieceDirection::Dog(d) => d.row_delta()
        }
    }

    fn col_delta(&self) -> i8 {
        match self {
            PieceDirection::Fox(d) => d.col_delta(),
            PieceDirection::Dog(d) => d.col_delta()
        }
    }
}

impl From<FoxDirection> for PieceDirection {
    fn from(value: FoxDirection) -> Self {
        PieceDirection::Fox(value)
    }
}

impl From<DogDirection> for PieceDirection {
    fn from(value: DogDirection) -> Self {
        PieceDirection::Dog(value)
    }
}
