//! Puzzle text parsing.

use std::num::NonZero;

use log::{debug, warn};
use thiserror::Error;

use crate::board::Board;
use crate::builder::BuilderInvalidReason;
use crate::location::Dimension;

/// Largest board [`parse`] accepts, counted in cells.
pub const MAX_CELLS: usize = 1 << 26;

/// Reasons puzzle text may be rejected by [`parse`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InputError {
    /// Input ended before a required value.
    #[error("input ended early, expected {expected}")]
    MissingToken {
        /// Description of the value that was expected next.
        expected: String,
    },
    /// A token could not be read as a non-negative integer.
    #[error("expected a non-negative integer, found {token:?}")]
    NotAnInteger {
        /// The offending token.
        token: String,
    },
    /// The board would have no rows or no columns.
    #[error("board dimensions must be at least 1x1")]
    ZeroDimension,
    /// The board has more than [`MAX_CELLS`] cells.
    #[error("a {rows}x{cols} board exceeds the limit of {} cells", MAX_CELLS)]
    BoardTooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The number of thresholds does not match the number of rows.
    #[error("board has {rows} rows but {thresholds} thresholds were given")]
    RowCountMismatch {
        /// Row count of the board.
        rows: usize,
        /// Number of thresholds supplied.
        thresholds: usize,
    },
    /// A row threshold exceeded the number of columns.
    #[error("row {row} poisons {eaten} cells but the board has only {cols} columns")]
    ThresholdOutOfRange {
        /// 1-based row.
        row: usize,
        /// The offending threshold.
        eaten: usize,
        /// Column count of the board.
        cols: usize,
    },
}

/// Parsed puzzle input: the board dimensions and the per-row poison thresholds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    /// `(rows, cols)`.
    pub dims: (Dimension, Dimension),
    /// `eaten[i]` poisoned cells at the start of row `i`.
    pub eaten: Vec<usize>,
}

impl Puzzle {
    /// Build the [`Board`] described by this puzzle.
    pub fn board(&self) -> Result<Board, InputError> {
        let (rows, cols) = (self.dims.0.get(), self.dims.1.get());
        if self.eaten.len() != rows {
            return Err(InputError::RowCountMismatch { rows, thresholds: self.eaten.len() });
        }

        Board::from_thresholds(self.dims, &self.eaten).map_err(|reasons| {
            match reasons.first() {
                Some(BuilderInvalidReason::ThresholdOutOfBounds { row, eaten }) => InputError::ThresholdOutOfRange {
                    row: row + 1,
                    eaten: *eaten,
                    cols,
                },
                // one threshold per row was checked above
                _ => InputError::RowCountMismatch { rows, thresholds: self.eaten.len() },
            }
        })
    }
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, expected: impl FnOnce() -> String) -> Result<usize, InputError> {
    let token = tokens.next().ok_or_else(|| InputError::MissingToken { expected: expected() })?;
    token.parse::<usize>().map_err(|_| InputError::NotAnInteger { token: token.to_string() })
}

fn dimension(value: usize) -> Result<Dimension, InputError> {
    NonZero::new(value).ok_or(InputError::ZeroDimension)
}

/// Parse whitespace-separated puzzle text: `m n` followed by `m` row thresholds.
///
/// Thresholds are validated against the column count here, so a [`Puzzle`] that parses
/// always yields a [`Board`]. Anything after the last threshold is ignored.
pub fn parse(text: &str) -> Result<Puzzle, InputError> {
    let mut tokens = text.split_whitespace();

    let rows = dimension(next_number(&mut tokens, || "row count".to_string())?)?;
    let cols = dimension(next_number(&mut tokens, || "column count".to_string())?)?;
    if rows.get().checked_mul(cols.get()).map_or(true, |cells| cells > MAX_CELLS) {
        return Err(InputError::BoardTooLarge { rows: rows.get(), cols: cols.get() });
    }

    let eaten = (0..rows.get())
        .map(|row| {
            let eaten = next_number(&mut tokens, || format!("threshold for row {}", row + 1))?;
            if eaten > cols.get() {
                return Err(InputError::ThresholdOutOfRange { row: row + 1, eaten, cols: cols.get() });
            }
            Ok(eaten)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("ignoring {} trailing token(s) after the last row threshold", trailing);
    }

    debug!("parsed {}x{} puzzle", rows, cols);
    Ok(Puzzle { dims: (rows, cols), eaten })
}

/// Parse `text` and build its [`Board`] in one go.
pub fn parse_board(text: &str) -> Result<Board, InputError> {
    parse(text)?.board()
}
