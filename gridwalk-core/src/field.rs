use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::FieldError;

pub const OPEN: char = '.';
pub const BLOCKED: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell { Open, Blocked }

impl Cell {
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch { OPEN => Some(Cell::Open), BLOCKED => Some(Cell::Blocked), _ => None }
    }

    pub fn symbol(self) -> char { match self { Cell::Open => OPEN, Cell::Blocked => BLOCKED } }

    pub fn is_open(self) -> bool { self == Cell::Open }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub const START: Pos = Pos { r: 0, c: 0 };

    pub fn new(r: usize, c: usize) -> Self { Self { r, c } }
}

/// One unit step of a monotonic path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move { Right, Down }

impl Move {
    pub fn apply(self, p: Pos) -> Pos {
        match self { Move::Right => Pos { r: p.r, c: p.c + 1 }, Move::Down => Pos { r: p.r + 1, c: p.c } }
    }

    pub fn symbol(self) -> char { match self { Move::Right => 'R', Move::Down => 'D' } }
}

/// A validated rectangular grid of open and blocked cells.
///
/// There is no way to mutate a `Field` in place; [`Field::with_blocked`]
/// returns a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Field {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>, // row-major
}

/// Validate raw rows into a [`Field`]. Shared by both counters.
pub fn validate<S: AsRef<str>>(raw_rows: &[S]) -> Result<Field, FieldError> { Field::parse_rows(raw_rows) }

impl Field {
    pub fn parse_rows<S: AsRef<str>>(raw_rows: &[S]) -> Result<Self, FieldError> {
        let first = raw_rows.first().ok_or(FieldError::EmptyField)?;
        let cols = first.as_ref().chars().count();
        let mut cells = Vec::with_capacity(raw_rows.len() * cols);
        for (r, row) in raw_rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found == 0 || found != cols {
                return Err(FieldError::MalformedField { row: r, expected: cols, found });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(FieldError::InvalidCell { row: r, col: c, found: ch })?;
                cells.push(cell);
            }
        }
        Ok(Self { rows: raw_rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn target(&self) -> Pos { Pos { r: self.rows - 1, c: self.cols - 1 } }

    /// Number of moves in every start-to-target monotonic path.
    pub fn path_len(&self) -> usize { self.rows + self.cols - 2 }

    pub fn in_bounds(&self, p: Pos) -> bool { p.r < self.rows && p.c < self.cols }

    pub fn get(&self, p: Pos) -> Option<Cell> {
        if self.in_bounds(p) { Some(self.cells[p.r * self.cols + p.c]) } else { None }
    }

    /// False for blocked cells and for positions outside the grid.
    pub fn is_open(&self, p: Pos) -> bool { matches!(self.get(p), Some(Cell::Open)) }

    pub fn blocked_count(&self) -> usize { self.cells.iter().filter(|c| !c.is_open()).count() }

    pub fn iterate_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows * self.cols).map(move |i| Pos { r: i / self.cols, c: i % self.cols })
    }

    /// Copy of this field with `p` blocked. Out-of-bounds positions leave it unchanged.
    pub fn with_blocked(&self, p: Pos) -> Self {
        let mut next = self.clone();
        if self.in_bounds(p) { next.cells[p.r * self.cols + p.c] = Cell::Blocked; }
        next
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.cells.chunks(self.cols).map(|row| row.iter().map(|c| c.symbol()).collect()).collect()
    }
}

impl TryFrom<Vec<String>> for Field {
    type Error = FieldError;
    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> { Field::parse_rows(&rows) }
}

impl From<Field> for Vec<String> {
    fn from(f: Field) -> Self { f.to_rows() }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() { writeln!(f, "{}", row)?; }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions() {
        let f = Field::parse_rows(&["..X", "...", "X.."]).unwrap();
        assert_eq!((f.rows(), f.cols()), (3, 3));
        assert_eq!(f.path_len(), 4);
        assert_eq!(f.target(), Pos::new(2, 2));
        assert_eq!(f.blocked_count(), 2);
        assert_eq!(f.get(Pos::new(0, 2)), Some(Cell::Blocked));
        assert_eq!(f.get(Pos::new(3, 0)), None);
    }

    #[test]
    fn empty_rows_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Field::parse_rows(&rows), Err(FieldError::EmptyField));
    }

    #[test]
    fn ragged_and_zero_length_rows_rejected() {
        assert_eq!(Field::parse_rows(&["..", "."]), Err(FieldError::MalformedField { row: 1, expected: 2, found: 1 }));
        assert_eq!(Field::parse_rows(&[""]), Err(FieldError::MalformedField { row: 0, expected: 0, found: 0 }));
        assert_eq!(Field::parse_rows(&[".", ""]), Err(FieldError::MalformedField { row: 1, expected: 1, found: 0 }));
    }

    #[test]
    fn invalid_symbol_rejected() {
        assert_eq!(Field::parse_rows(&["..", ".o"]), Err(FieldError::InvalidCell { row: 1, col: 1, found: 'o' }));
        // lowercase x is not a blocked cell
        assert!(matches!(Field::parse_rows(&["x"]), Err(FieldError::InvalidCell { .. })));
    }

    #[test]
    fn first_failing_row_decides() {
        // row 0 has a bad symbol before row 1's length mismatch is seen
        assert!(matches!(Field::parse_rows(&[".?", "..."]), Err(FieldError::InvalidCell { row: 0, .. })));
    }

    #[test]
    fn with_blocked_returns_copy() {
        let f = Field::parse_rows(&["..", ".."]).unwrap();
        let g = f.with_blocked(Pos::new(1, 0));
        assert!(f.is_open(Pos::new(1, 0)));
        assert!(!g.is_open(Pos::new(1, 0)));
        assert_eq!(f.with_blocked(Pos::new(5, 5)), f);
    }

    #[test]
    fn display_round_trips_rows() {
        let f = Field::parse_rows(&[".X.", "..X"]).unwrap();
        assert_eq!(f.to_string(), ".X.\n..X\n");
        assert_eq!(f.to_rows(), vec![".X.".to_string(), "..X".to_string()]);
    }

    #[test]
    fn serde_uses_row_strings() {
        let f = Field::parse_rows(&[".X", ".."]).unwrap();
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"[".X",".."]"#);
        assert_eq!(serde_json::from_str::<Field>(&json).unwrap(), f);
        assert!(serde_json::from_str::<Field>(r#"[".X","."]"#).is_err());
    }
}
