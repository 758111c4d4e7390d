#![warn(missing_docs)]

//! # `poisongrid`
//!
//! A solver for a poison-avoidance grid game: a token sits on a rectangular board and may move one cell
//! right or one cell down, never onto a poisoned cell.
//! Each row is poisoned from the left by a per-row threshold.
//!
//! Begin by building a board, either through [`BoardBuilder`](builder::BoardBuilder) or from puzzle text
//! with [`input::parse_board`].
//! Call [`solve()`](crate::Board::solve) to obtain a [`WinTable`] and hand it to [`report::write_report`].
//!
//! # Internals
//! The win table is filled by backward induction in a single `O(rows × cols)` sweep.
//! The last row is the base case: an edible cell there wins.
//! Moving upward, an edible cell wins if it can step onto an edible, winning successor.
//! Each row is swept left to right, so the right neighbour has not been filled when it is read.
//! The successor's value is not negated, so the table is not the set of winning positions of a
//! normal alternating game.

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::Cell;
pub use input::InputError;
pub use location::{Dimension, Location};
pub use solver::WinTable;
pub use step::Step;

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod step;
pub mod builder;
pub mod input;
pub mod report;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
