use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::{debug, trace};
use ndarray::Array2;

use crate::board::Board;
use crate::location::{Dimension, Location};
use crate::step::Step;

/// Per-cell win classification for a [`Board`], produced by [`WinTable::evaluate`].
///
/// The table is immutable once evaluated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinTable {
    wins: Array2<bool>,
    dims: (Dimension, Dimension),
}

impl WinTable {
    /// Fill the table by backward induction, bottom row first.
    ///
    /// # Recurrence
    /// A cell on the last row wins if and only if it is edible.
    /// Any other edible cell wins if some successor (one step [`Right`](Step::Right) or one step
    /// [`Down`](Step::Down)) is on the board, is edible, and itself wins.
    /// Poisoned cells never win.
    ///
    /// Note the successor's value is taken as-is rather than negated, so this is not the usual
    /// alternating two-player analysis.
    ///
    /// Columns are swept left to right, so a cell's right neighbour is read before it is filled
    /// and still holds `false`. In effect only the down move carries a win upward.
    pub fn evaluate(board: &Board) -> Self {
        let dims = board.dims();
        let (rows, cols) = (dims.0.get(), dims.1.get());
        let mut wins = Array2::from_elem((rows, cols), false);

        let last = rows - 1;
        for col in 0..cols {
            wins[(last, col)] = board.is_edible(Location(last, col));
        }
        trace!("base row {} has {} winning cells", last + 1, wins.row(last).iter().filter(|w| **w).count());

        for row in (0..last).rev() {
            for col in 0..cols {
                let here = Location(row, col);
                if !board.is_edible(here) {
                    // already false
                    continue;
                }

                // the right neighbour is not filled yet
                let reachable_win = Step::successors_of(here, dims)
                    .any(|(_, next)| board.is_edible(next) && wins[next.as_index()]);
                wins[here.as_index()] = reachable_win;
            }
            trace!("row {} has {} winning cells", row + 1, wins.row(row).iter().filter(|w| **w).count());
        }

        let table = Self { wins, dims };
        debug!("evaluated {}x{} board: {} winning cells", rows, cols, table.count());
        table
    }

    /// Dimensions in `(rows, cols)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `location` is classified winning. Locations off the board never win.
    pub fn is_winning(&self, location: Location) -> bool {
        self.wins.get(location.as_index()).copied().unwrap_or(false)
    }

    /// Number of winning cells.
    pub fn count(&self) -> usize {
        self.wins.iter().filter(|w| **w).count()
    }

    /// Number of winning cells in `row`; zero for rows off the board.
    pub fn count_in_row(&self, row: usize) -> usize {
        if row >= self.dims.0.get() {
            return 0;
        }

        self.wins.row(row).iter().filter(|w| **w).count()
    }

    /// Every winning cell, in row-major order.
    pub fn winning_cells(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.dims.0.get())
            .cartesian_product(0..self.dims.1.get())
            .map(Location::from)
            .filter(|location| self.is_winning(*location))
    }

    /// Shorthand for collecting [`Self::winning_cells`].
    pub fn winning_vec(&self) -> Vec<Location> {
        self.winning_cells().collect_vec()
    }
}

impl Display for WinTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.wins.rows() {
            for win in row {
                write!(f, "{}", if *win { 'W' } else { '.' })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
