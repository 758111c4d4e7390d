use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A board dimension; boards are never empty along either axis.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board, 0-based. The top left corner is `Location(0, 0)`.
///
/// The derived ordering is row-major, which is also the order the reporter lists cells in.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Step by `rhs`, returning [`None`] if the result leaves a board of size `dims` (rows, cols).
    pub(crate) fn offset_within(self, rhs: (usize, usize), dims: (Dimension, Dimension)) -> Option<Self> {
        let row = self.0.checked_add(rhs.0)?;
        let col = self.1.checked_add(rhs.1)?;
        (row < dims.0.get() && col < dims.1.get()).then_some(Self(row, col))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

/// Renders the 1-based `row col` pair.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0 + 1, self.1 + 1)
    }
}
