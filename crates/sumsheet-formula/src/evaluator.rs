use crate::lexer::{Lexer, Token};
use sumsheet_core::{is_valid_formula, CellCoord, EvalError};

/// Evaluator for additive formulas.
///
/// Parameterized over a value lookup so it stays decoupled from grid
/// storage: references read the *current numeric value* of a cell, never
/// its display text.
pub struct Evaluator<F>
where
    F: Fn(CellCoord) -> f64,
{
    value_of: F,
}

impl<F> Evaluator<F>
where
    F: Fn(CellCoord) -> f64,
{
    pub fn new(value_of: F) -> Self {
        Self { value_of }
    }

    /// Evaluate a formula to its sum.
    ///
    /// The grammar is re-validated even though callers normally classify
    /// first; text that never matched the grammar is `InvalidSyntax`
    /// before tokenization starts.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        if !is_valid_formula(expression) {
            return Err(EvalError::InvalidSyntax);
        }

        let tokens = Lexer::new(expression).tokenize()?;

        let mut operands: Vec<f64> = Vec::new();
        let mut operators = 0usize;

        for token in tokens {
            match token {
                Token::Plus => operators += 1,
                Token::Number(n) => operands.push(n),
                Token::CellRef(coord) => operands.push((self.value_of)(coord)),
            }
        }

        // N operands require exactly N-1 '+' signs: no unary, leading,
        // trailing or doubled operators.
        if operands.len() != operators + 1 {
            return Err(EvalError::ArityMismatch {
                operands: operands.len(),
                operators,
            });
        }

        let mut sum = 0.0;
        while let Some(operand) = operands.pop() {
            sum += operand;
        }
        Ok(sum)
    }
}
