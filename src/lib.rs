pub mod counting;
pub mod grid;
pub mod logger;

pub use counting::{CountMode, CountReport, Runner};
pub use grid::read_field;
pub use gridwalk_core::{Field, PathCount, Strategy};
