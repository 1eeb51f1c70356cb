use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a formula can fail to evaluate.
///
/// Every variant collapses to the single `"ERROR"` display marker at the
/// engine boundary; the taxonomy stays public so the evaluator can be
/// tested directly.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalError {
    /// The text does not match the formula grammar at all.
    #[error("invalid formula syntax")]
    InvalidSyntax,

    /// A cell reference falls outside the grid.
    #[error("cell reference out of range")]
    OutOfRange,

    /// An unexpected character, or a malformed operand.
    #[error("invalid token '{0}' in formula")]
    InvalidToken(char),

    /// Operand and operator counts do not line up (N operands need
    /// exactly N-1 `+` signs).
    #[error("arity mismatch: {operands} operands, {operators} operators")]
    ArityMismatch { operands: usize, operators: usize },
}
