pub mod evaluator;
pub mod lexer;

pub use evaluator::Evaluator;
pub use lexer::{Lexer, Token};

use sumsheet_core::{CellCoord, EvalError};

/// Evaluate an additive formula against the current grid state.
///
/// `value_of` reads the current numeric value of a referenced cell
/// (text and empty cells read as 0).
pub fn evaluate_formula(
    expression: &str,
    value_of: impl Fn(CellCoord) -> f64,
) -> Result<f64, EvalError> {
    Evaluator::new(value_of).evaluate(expression)
}
