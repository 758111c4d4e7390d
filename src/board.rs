use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::builder::{BoardBuilder, BuilderInvalidReason};
use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::solver::WinTable;

/// A rectangular board of [`Cell`]s, indexed `(row, col)` from the top left.
///
/// [`Board`]s should be built using a [`BoardBuilder`], or with [`Board::from_thresholds`] when
/// the poisoned cells are given as per-row prefixes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Build a board whose row `i` has its first `eaten[i]` columns poisoned.
    ///
    /// Rows past the end of `eaten` stay fully edible.
    pub fn from_thresholds(dims: (Dimension, Dimension), eaten: &[usize]) -> Result<Self, Vec<BuilderInvalidReason>> {
        let mut builder = BoardBuilder::with_dims(dims);
        for (row, eaten) in eaten.iter().enumerate() {
            builder.poison_prefix(row, *eaten);
        }

        builder.build().map_err(|reasons| reasons.clone())
    }

    /// Dimensions in `(rows, cols)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The cell at `location`, or [`None`] if it lies outside the board.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    pub(crate) fn is_edible(&self, location: Location) -> bool {
        self.cell(location).is_some_and(|cell| cell.is_edible())
    }

    /// Evaluate the win table for this board. See [`WinTable::evaluate`].
    pub fn solve(&self) -> WinTable {
        WinTable::evaluate(self)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.display())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
