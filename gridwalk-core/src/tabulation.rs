//! Bottom-up path counting.
//!
//! `T[i][j]` holds the number of monotonic paths from the start to `(i, j)`.
//! Row-major order fills the cell above and the cell to the left before the
//! cell itself, so one pass suffices.

use itertools::Itertools;
use log::debug;
use std::fmt::{self, Display, Formatter};

use crate::error::FieldError;
use crate::field::{Field, Pos};
use crate::PathCount;

/// Filled table of partial counts, one entry per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    cols: usize,
    counts: Vec<PathCount>,
}

impl Table {
    fn zeroed(rows: usize, cols: usize) -> Self { Self { rows, cols, counts: vec![0; rows * cols] } }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// `None` outside the table.
    pub fn get(&self, p: Pos) -> Option<PathCount> {
        if p.r < self.rows && p.c < self.cols { Some(self.counts[self.index(p)]) } else { None }
    }

    fn index(&self, p: Pos) -> usize { p.r * self.cols + p.c }

    /// Contribution of `from` when stepping into a neighbour: zero through blocked cells.
    #[inline]
    fn inherited(&self, field: &Field, from: Pos) -> PathCount { if field.is_open(from) { self.counts[self.index(from)] } else { 0 } }

    /// Count at the bottom-right cell.
    pub fn target(&self) -> PathCount { self.counts[self.counts.len() - 1] }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.counts.iter().map(|n| n.to_string().len()).max().unwrap_or(1);
        for row in self.counts.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|n| format!("{:>width$}", n)).join(" "))?;
        }
        Ok(())
    }
}

/// Fill the whole table.
pub fn tabulate(field: &Field) -> Result<Table, FieldError> {
    let (rows, cols) = (field.rows(), field.cols());
    let mut table = Table::zeroed(rows, cols);
    if !field.is_open(Pos::START) {
        debug!("tabulation: start cell blocked");
        return Ok(table);
    }
    table.counts[0] = 1;
    for i in 0..rows {
        for j in 0..cols {
            if i == 0 && j == 0 { continue; }
            let here = Pos::new(i, j);
            if !field.is_open(here) { continue; }
            let above = if i > 0 { table.inherited(field, Pos::new(i - 1, j)) } else { 0 };
            let left = if j > 0 { table.inherited(field, Pos::new(i, j - 1)) } else { 0 };
            let idx = table.index(here);
            table.counts[idx] = above.checked_add(left).ok_or(FieldError::CountOverflow { row: i, col: j })?;
        }
    }
    debug!("tabulation: {}x{} table, {} paths", rows, cols, table.target());
    Ok(table)
}

/// Count valid paths in `O(rows * cols)` time.
pub fn count_tabulated(field: &Field) -> Result<PathCount, FieldError> {
    if !field.is_open(Pos::START) { return Ok(0); }
    Ok(tabulate(field)?.target())
}

/// Same recurrence keeping a single row of counts.
pub fn count_rolling(field: &Field) -> Result<PathCount, FieldError> {
    if !field.is_open(Pos::START) { return Ok(0); }
    let mut row: Vec<PathCount> = vec![0; field.cols()];
    row[0] = 1;
    for i in 0..field.rows() {
        for j in 0..field.cols() {
            let here = Pos::new(i, j);
            if !field.is_open(here) { row[j] = 0; continue; }
            if j > 0 {
                // row[j] still holds the value from the row above; blocked cells were zeroed
                row[j] = row[j].checked_add(row[j - 1]).ok_or(FieldError::CountOverflow { row: i, col: j })?;
            }
        }
    }
    Ok(row[field.cols() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(rows: &[&str]) -> Field { Field::parse_rows(rows).unwrap() }

    #[test]
    fn table_follows_recurrence() {
        let t = tabulate(&field(&[".X", ".."])).unwrap();
        assert_eq!(t.get(Pos::new(0, 0)), Some(1));
        assert_eq!(t.get(Pos::new(0, 1)), Some(0));
        assert_eq!(t.get(Pos::new(1, 0)), Some(1));
        assert_eq!(t.get(Pos::new(1, 1)), Some(1));
        assert_eq!(t.target(), 1);
    }

    #[test]
    fn lookups_outside_table_are_none() {
        let t = tabulate(&field(&["...", "..."])).unwrap();
        // (0, cols) would alias (1, 0) in row-major storage
        assert_eq!(t.get(Pos::new(0, 3)), None);
        assert_eq!(t.get(Pos::new(2, 0)), None);
        assert_eq!(t.get(Pos::new(1, 2)), Some(3));
    }

    #[test]
    fn blocked_start_is_zero_everywhere() {
        let f = field(&["X.", ".."]);
        assert_eq!(count_tabulated(&f), Ok(0));
        assert_eq!(count_rolling(&f), Ok(0));
        let t = tabulate(&f).unwrap();
        assert!(f.iterate_cells().all(|p| t.get(p) == Some(0)));
    }

    #[test]
    fn open_grid_gives_binomial() {
        // C(6, 2) for a 3x5 grid
        let f = field(&[".....", ".....", "....."]);
        assert_eq!(count_tabulated(&f), Ok(15));
        assert_eq!(count_rolling(&f), Ok(15));
    }

    #[test]
    fn wall_with_gaps() {
        let f = field(&["....", ".XX.", "...."]);
        assert_eq!(count_tabulated(&f), Ok(2));
        assert_eq!(count_rolling(&f), Ok(2));
    }

    #[test]
    fn display_aligns_columns() {
        let t = tabulate(&field(&["...", "...", "..."])).unwrap();
        assert_eq!(t.to_string(), "1 1 1\n1 2 3\n1 3 6\n");
    }

    #[test]
    fn huge_open_grid_overflows_cleanly() {
        let row = ".".repeat(80);
        let rows: Vec<&str> = std::iter::repeat(row.as_str()).take(80).collect();
        let f = Field::parse_rows(&rows).unwrap();
        assert!(matches!(count_tabulated(&f), Err(FieldError::CountOverflow { .. })));
        assert!(matches!(count_rolling(&f), Err(FieldError::CountOverflow { .. })));
    }
}
