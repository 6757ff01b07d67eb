use log::debug;
use rand::{Rng, SeedableRng};

use crate::error::FieldError;
use crate::field::{Cell, Field};

/// Seeded source of random fields; the same seed always yields the same fields.
pub struct FieldGenerator {
    rng: rand::rngs::StdRng,
}

impl FieldGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Each cell is blocked independently with probability `blocked_ratio` (clamped to `[0, 1]`).
    pub fn generate(&mut self, rows: usize, cols: usize, blocked_ratio: f64) -> Result<Field, FieldError> {
        self.fill(rows, cols, blocked_ratio, false)
    }

    /// Like [`generate`](Self::generate) but the start and target cells are always open.
    pub fn generate_open_corners(&mut self, rows: usize, cols: usize, blocked_ratio: f64) -> Result<Field, FieldError> {
        self.fill(rows, cols, blocked_ratio, true)
    }

    fn fill(&mut self, rows: usize, cols: usize, blocked_ratio: f64, open_corners: bool) -> Result<Field, FieldError> {
        if rows == 0 { return Err(FieldError::EmptyField); }
        if cols == 0 { return Err(FieldError::MalformedField { row: 0, expected: 0, found: 0 }); }
        let p = if blocked_ratio.is_nan() { 0.0 } else { blocked_ratio.clamp(0.0, 1.0) };
        let last = rows * cols - 1;
        let cells = (0..rows * cols)
            .map(|i| {
                let blocked = self.rng.gen_bool(p);
                if blocked && !(open_corners && (i == 0 || i == last)) { Cell::Blocked } else { Cell::Open }
            })
            .collect();
        let field = Field::from_cells(rows, cols, cells);
        debug!("generated {}x{} field with {} blocked cells", rows, cols, field.blocked_count());
        Ok(field)
    }
}
