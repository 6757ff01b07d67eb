//! Exhaustive path counting.
//!
//! Every integer `i` in `0..2^L` (with `L = rows + cols - 2`) encodes one
//! candidate path: bit `j` set means step `j` moves right, clear means down.
//! Each candidate is simulated from the start cell and kept only if it ends
//! exactly on an open target cell. This is the exponential baseline the
//! tabulated counter is checked against.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::error::FieldError;
use crate::field::{Field, Move, Pos};
use crate::PathCount;

/// Largest path length the enumeration accepts.
pub const MAX_EXHAUSTIVE_STEPS: usize = 31;

/// A complete start-to-target move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(pub Vec<Move>);

impl Path {
    pub fn moves(&self) -> &[Move] { &self.0 }

    /// Cells visited, start and end included.
    pub fn positions(&self) -> Vec<Pos> {
        let mut at = Pos::START;
        let mut out = Vec::with_capacity(self.0.len() + 1);
        out.push(at);
        for m in &self.0 { at = m.apply(at); out.push(at); }
        out
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for m in &self.0 { write!(f, "{}", m.symbol())?; }
        Ok(())
    }
}

fn check_size(field: &Field) -> Result<usize, FieldError> {
    let steps = field.path_len();
    if steps > MAX_EXHAUSTIVE_STEPS {
        return Err(FieldError::FieldTooLarge { steps, max: MAX_EXHAUSTIVE_STEPS });
    }
    Ok(steps)
}

#[inline]
fn step_of(bits: u64, j: usize) -> Move { if (bits >> j) & 1 == 1 { Move::Right } else { Move::Down } }

/// Decode candidate `bits` into its `len` moves.
pub fn candidate(bits: u64, len: usize) -> Vec<Move> { (0..len).map(|j| step_of(bits, j)).collect() }

/// Simulate one candidate without materializing its moves.
///
/// Leaving the grid or landing on a blocked cell rejects the candidate; it is
/// never an error.
pub fn is_valid_candidate(field: &Field, bits: u64, len: usize) -> bool {
    let mut at = Pos::START;
    for j in 0..len {
        if !field.is_open(at) { return false; }
        at = step_of(bits, j).apply(at);
    }
    at == field.target() && field.is_open(at)
}

/// Count valid paths by enumerating all `2^L` candidates.
pub fn count_exhaustive(field: &Field) -> Result<PathCount, FieldError> {
    let len = check_size(field)?;
    let total = 1u64 << len;
    debug!("exhaustive: {}x{} field, {} steps, {} candidates", field.rows(), field.cols(), len, total);
    let mut counter: PathCount = 0;
    for bits in 0..total {
        if is_valid_candidate(field, bits, len) {
            trace!("valid candidate {:#b}", bits);
            counter += 1;
        }
    }
    debug!("exhaustive: {} valid paths", counter);
    Ok(counter)
}

/// Valid paths in enumeration order, built one at a time.
pub fn valid_paths_iter(field: &Field) -> Result<impl Iterator<Item = Path> + '_, FieldError> {
    let len = check_size(field)?;
    Ok((0..1u64 << len).filter(move |&bits| is_valid_candidate(field, bits, len)).map(move |bits| Path(candidate(bits, len))))
}

/// Every valid path, in enumeration order.
pub fn valid_paths(field: &Field) -> Result<Vec<Path>, FieldError> { Ok(valid_paths_iter(field)?.collect()) }
