use std::ops::IndexMut;

use ndarray::{s, Array2, AssignElem};

use crate::board::Board;
use crate::cell::Cell;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A row threshold was given for a row outside the board.
    RowOutOfBounds {
        /// 0-based row that was requested.
        row: usize,
    },
    /// A row threshold exceeded the number of columns.
    ThresholdOutOfBounds {
        /// 0-based row the threshold was given for.
        row: usize,
        /// The offending threshold.
        eaten: usize,
    },
    /// A single poisoned cell was placed outside the board.
    LocationOutOfBounds {
        /// The offending location.
        location: Location,
    },
}

/// A builder for rectangular poison boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    /// Every cell starts out edible.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    /// Poison the first `eaten` columns of `row`, i.e. columns `0..eaten`.
    ///
    /// May cause the builder to enter a [`RowOutOfBounds`](BuilderInvalidReason::RowOutOfBounds) or
    /// [`ThresholdOutOfBounds`](BuilderInvalidReason::ThresholdOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn poison_prefix(&mut self, row: usize, eaten: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if row >= self.dims.0.get() {
            self.invalid_reasons.push(BuilderInvalidReason::RowOutOfBounds { row });
            return self;
        }

        if eaten > self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::ThresholdOutOfBounds { row, eaten });
            return self;
        }

        self.cells.slice_mut(s![row, ..eaten]).fill(Cell::Poisoned);
        self
    }

    /// Poison a single cell at `location`.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn poison(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::LocationOutOfBounds { location });
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Poisoned);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}
