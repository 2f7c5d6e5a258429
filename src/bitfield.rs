use crate::tiles::Position;
use primitive_types::U256;
use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl};

/// A trait for any integer type that can be used as a bitfield to record which squares of the
/// board are occupied. See also the [`crate::impl_bitfield!`] and [`crate::impl_bitfield_bigint!`]
/// macros that can help to implement this trait for a particular integer type.
pub trait BitField:
    Sized +
    Copy +
    From<u8> +
    BitAnd<Output=Self> +
    BitAndAssign +
    BitOr<Output=Self> +
    BitOrAssign +
    Not<Output=Self> +
    Shl<u32, Output=Self> +
    PartialEq +
    Default +
    Debug
{
    /// The number of bits used to represent a single row of the board. This is also the largest
    /// board length the bitfield can hold, as `ROW_WIDTH * ROW_WIDTH` must not exceed the number
    /// of bits in the integer type.
    const ROW_WIDTH: u8;

    /// Returns the number of ones in the binary representation of `self`.
    fn count_ones(&self) -> u32;

    /// Whether the bitfield is empty (ie, no set bits).
    fn is_empty(&self) -> bool;

    /// Create a bitmask for the given position. Only the bit corresponding to the position on the
    /// board will be set. The position must be on the board.
    fn position_mask(p: Position) -> Self {
        Self::from(1) << ((p.row as u32 * Self::ROW_WIDTH as u32) + p.col as u32)
    }
}

/// Implement the [`BitField`] trait for the given integer type. First argument should be the type
/// to implement the trait for; the second should be the byte value to use for
/// [`BitField::ROW_WIDTH`]. This macro is for use with the standard library integer types.
#[macro_export] macro_rules! impl_bitfield {
    ($t:ty, $row_width:expr) => {
        impl BitField for $t {
            const ROW_WIDTH: u8 = $row_width;

            fn count_ones(&self) -> u32 {
                <$t>::count_ones(*self)
            }

            fn is_empty(&self) -> bool {
                *self == 0
            }
        }
    };
}

/// Implement the [`BitField`] trait for the given integer type. First argument should be the type
/// to implement the trait for; the second should be the byte value to use for
/// [`BitField::ROW_WIDTH`]. This macro is for use with the big integer types provided by the
/// [`primitive_types`] crate, which store their value as an array of `u64` words.
#[macro_export] macro_rules! impl_bitfield_bigint {
    ($t:ty, $row_width:expr) => {
        impl BitField for $t {
            const ROW_WIDTH: u8 = $row_width;

            fn count_ones(&self) -> u32 {
                self.0.iter().map(|w| w.count_ones()).sum()
            }

            fn is_empty(&self) -> bool {
                self.is_zero()
            }
        }
    };
}

impl_bitfield!(u64, 8);
impl_bitfield!(u128, 11);
impl_bitfield_bigint!(U256, 16);
