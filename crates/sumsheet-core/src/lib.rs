pub mod cell;
pub mod classify;
pub mod coord;
pub mod error;
pub mod grid;

pub use cell::{format_number, Cell, CellValue};
pub use classify::{classify, is_valid_formula, is_valid_number, InputKind};
pub use coord::{col_from_label, col_to_label, CellCoord};
pub use error::EvalError;
pub use grid::{Grid, NUM_COLS, NUM_ROWS};
