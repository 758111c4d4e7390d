/// State of a single cell. Cells start out edible; thresholds poison a prefix of each row.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// Free to move onto.
    #[default]
    Edible,
    /// Never a live position.
    Poisoned,
}

impl Cell {
    /// Whether a token may land here.
    #[inline]
    pub fn is_edible(&self) -> bool {
        *self == Self::Edible
    }

    pub(crate) fn display(&self) -> char {
        match self {
            Self::Edible => '.',
            Self::Poisoned => '#',
        }
    }
}
