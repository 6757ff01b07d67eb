use thiserror::Error;

/// Reasons a raw grid is rejected or a count cannot be produced.
///
/// Every variant is raised before any partial count is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty field: no rows supplied")]
    EmptyField,

    /// A row is empty or its length differs from the first row.
    #[error("malformed field: row {row} has {found} columns, expected {expected}")]
    MalformedField { row: usize, expected: usize, found: usize },

    #[error("invalid cell {found:?} at r{},c{} (expected '.' or 'X')", .row + 1, .col + 1)]
    InvalidCell { row: usize, col: usize, found: char },

    /// Exhaustive enumeration only: path length exceeds the enumeration width.
    #[error("field too large for exhaustive search: {steps} steps (max {max})")]
    FieldTooLarge { steps: usize, max: usize },

    #[error("path count overflowed at r{},c{}", .row + 1, .col + 1)]
    CountOverflow { row: usize, col: usize },
}

/// Failures of the string collaborators in [`crate::text`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("invalid character {found:?} at index {index} (lowercase letters and whitespace only)")]
    InvalidCharacter { index: usize, found: char },

    #[error("input does not match any date pattern: {0:?}")]
    UnrecognizedDate(String),

    #[error("unknown month name {0:?}")]
    UnknownMonth(String),

    #[error("bad numerical date data {0:?}")]
    BadNumber(String),

    #[error("{field} {value} out of range")]
    OutOfRange { field: &'static str, value: i64 },
}
