use crate::bitfield::BitField;
use crate::tiles::Position;

/// Records which squares of the board are occupied, using a single integer of type `T` with one bit
/// per square. This does not know which piece is on a square, only that there is one; the game
/// state keeps the pieces themselves and uses this for fast collision checks.
///
/// All positions passed to these methods must be on the board, which in turn must be no larger
/// than `T::ROW_WIDTH` squares along each side.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Default, Debug)]
pub struct Occupancy<T: BitField> {
    bits: T
}

impl<T: BitField> Occupancy<T> {

    /// Mark the given position as occupied.
    pub fn set(&mut self, p: Position) {
        self.bits |= T::position_mask(p);
    }

    /// Mark the given position as empty.
    pub fn clear(&mut self, p: Position) {
        self.bits &= !T::position_mask(p);
    }

    /// Check whether the given position is occupied.
    pub fn is_occupied(&self, p: Position) -> bool {
        !(self.bits & T::position_mask(p)).is_empty()
    }

    /// Move the occupancy bit from one position to another. Does not check that `from` was
    /// occupied or that `to` was empty.
    pub fn move_bit(&mut self, from: Position, to: Position) {
        self.clear(from);
        self.set(to);
    }

    /// The number of occupied squares.
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }
}
