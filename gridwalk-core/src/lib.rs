//! Counting monotonic paths across a grid of open and blocked cells.
//!
//! Two strategies answer the same question and must agree on every field
//! small enough for both:
//! - [`exhaustive`] enumerates all `2^L` right/down move sequences,
//! - [`tabulation`] fills a table of partial counts in `O(rows * cols)`.
//!
//! ```
//! use gridwalk_core::{count_exhaustive, count_tabulated, Field};
//!
//! let field = Field::parse_rows(&[".X", ".."]).unwrap();
//! assert_eq!(count_exhaustive(&field), Ok(1));
//! assert_eq!(count_tabulated(&field), Ok(1));
//! ```

pub mod counter;
pub mod devlog;
pub mod error;
pub mod exhaustive;
pub mod field;
pub mod generator;
pub mod tabulation;
pub mod text;

/// Number of distinct valid paths.
pub type PathCount = u128;

pub use counter::{ExhaustiveCounter, PathCounter, Strategy, TabulationCounter};
pub use error::{FieldError, TextError};
pub use exhaustive::{count_exhaustive, MAX_EXHAUSTIVE_STEPS};
pub use field::{validate, Cell, Field, Move, Pos};
pub use generator::FieldGenerator;
pub use tabulation::count_tabulated;
