//! This crate provides the rules of Fox and Dogs, a two-player chase game played on the dark
//! squares of a checkered board. One player controls a single fox, which may move one square along
//! any diagonal; the other controls a pack of dogs, which may only move one square diagonally
//! forwards. The dogs win by leaving the fox with nowhere to move. The fox wins by reaching the far
//! edge of the board or by getting past more than three of the dogs.
//!
//! It is not a goal of this crate to provide a game client or a computer opponent, only the data
//! and logic needed to build one.
//!
//! # Getting started
//!
//! - [`config::GameConfig`]: Describes the starting layout: board size, and where the fox and each
//!   dog begin. The default is the standard 8x8 layout with four dogs.
//! - [`game::state::GameState`]: Keeps track of the pieces on the board and whose turn it is, and
//!   implements the movement and win rules. It knows nothing of rounds, timing or selection.
//! - [`game::Game`]: Wraps a `GameState` and runs a single match: enforcing turn order, counting
//!   rounds, recording moves, detecting the end of the game and handling square-by-square
//!   selection as a player clicking on a board would.
//! - [`results::ResultTable`]: Collects the results of finished games and ranks them.
//!
//! # Board size
//!
//! `GameState` and `Game` are generic over the integer type used as a bitfield to record which
//! squares are occupied (see [`bitfield::BitField`]). Larger boards need larger integer types, so a
//! few type aliases are provided:
//!
//! - [`game::SmallGame`] for boards up to 8x8 (backed by `u64`).
//! - [`game::MediumGame`] for boards up to 11x11 (backed by `u128`).
//! - [`game::LargeGame`] for boards up to 16x16 (backed by [`primitive_types::U256`]).

/// Miscellaneous utilities used elsewhere in the crate.
#[macro_use]
mod utils;

/// Code relating to squares and coordinates.
pub mod tiles;

/// The movement directions available to each side.
pub mod direction;

/// Code relating to game pieces.
pub mod pieces;

/// Errors used elsewhere in the crate.
pub mod error;

/// An implementation of a bitfield, used to record which squares are occupied.
pub mod bitfield;

/// Code relating to the board, including geometry and occupancy.
pub mod board;

/// The starting layout of a game.
pub mod config;

/// Code for implementing a game, including rules, state and the match controller.
pub mod game;

/// Recording and ranking the results of finished games.
pub mod results;
