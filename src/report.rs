//! Output of the win table in the `count` then `row col` format.

use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;

use crate::solver::WinTable;

/// The count of winning cells, then one 1-based `row col` line per winning cell in row-major order.
pub struct Report<'a>(pub &'a WinTable);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0.count())?;
        for location in self.0.winning_cells() {
            writeln!(f, "{}", location)?;
        }

        Ok(())
    }
}

/// Write the [`Report`] for `table` to `out`.
pub fn write_report(table: &WinTable, mut out: impl Write) -> io::Result<()> {
    write!(out, "{}", Report(table))
}

/// The [`Report`] for `table` as a [`String`].
pub fn render(table: &WinTable) -> String {
    Report(table).to_string()
}
