use strum::VariantArray;

use crate::location::{Dimension, Location};

/// The moves available to a token: one cell right or one cell down.
///
/// Both are "forward" in the row-major ordering of the board, which is what lets the
/// evaluator fill its table in a single backward sweep.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// One column to the right, same row.
    Right,
    /// One row down, same column.
    Down,
}

impl Step {
    fn delta(&self) -> (usize, usize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Attempt the step from `location` on a board of size `dims` and return the destination,
    /// or [`None`] if the step would leave the board.
    pub fn attempt_from(&self, location: Location, dims: (Dimension, Dimension)) -> Option<Location> {
        location.offset_within(self.delta(), dims)
    }

    /// All in-bounds successors of `location`, in [`Self::VARIANTS`] order.
    pub fn successors_of(location: Location, dims: (Dimension, Dimension)) -> impl Iterator<Item = (Self, Location)> {
        Self::VARIANTS.iter()
            .filter_map(move |dir| dir.attempt_from(location, dims).map(|dest| (*dir, dest)))
    }
}
