use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::Field;
use crate::{exhaustive, tabulation, PathCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy { Exhaustive, Tabulation }

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Exhaustive, Strategy::Tabulation];

    pub fn counter(self) -> Box<dyn PathCounter> {
        match self {
            Strategy::Exhaustive => Box::new(ExhaustiveCounter::new()),
            Strategy::Tabulation => Box::new(TabulationCounter::new()),
        }
    }
}

/// Common contract of both counting strategies.
pub trait PathCounter {
    fn name(&self) -> &str;
    fn count(&self, field: &Field) -> Result<PathCount, FieldError>;

    /// Validate raw rows, then count. Validation errors surface before any counting.
    fn count_rows(&self, rows: &[&str]) -> Result<PathCount, FieldError> {
        let field = Field::parse_rows(rows)?;
        self.count(&field)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveCounter;
impl ExhaustiveCounter {
    pub fn new() -> Self { Self }
}

impl PathCounter for ExhaustiveCounter {
    fn name(&self) -> &str { "Exhaustive" }
    fn count(&self, field: &Field) -> Result<PathCount, FieldError> { exhaustive::count_exhaustive(field) }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TabulationCounter;
impl TabulationCounter { pub fn new() -> Self { Self } }

impl PathCounter for TabulationCounter {
    fn name(&self) -> &str { "Tabulation" }
    fn count(&self, field: &Field) -> Result<PathCount, FieldError> { tabulation::count_tabulated(field) }
}
