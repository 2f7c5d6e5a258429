/// Code relating to the size and shape of the board.
pub mod geometry;

/// Bitfield record of which squares are occupied.
pub mod occupancy;
