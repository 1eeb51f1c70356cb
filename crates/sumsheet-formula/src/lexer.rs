use sumsheet_core::{col_from_label, CellCoord, EvalError};

/// Token types for the additive formula grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A decimal literal.
    Number(f64),
    /// A cell reference, already bounds-checked against the grid.
    CellRef(CellCoord),
    /// The only operator the grammar admits.
    Plus,
}

/// Lexer for tokenizing formula expressions.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Whitespace and `=` are skipped wherever they appear; the grammar
    /// check upstream guarantees `=` only occurs at the front.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' {
                self.advance();
                continue;
            }
            tokens.push(self.next_token(c)?);
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        self.position += 1;
        c
    }

    fn next_token(&mut self, c: char) -> Result<Token, EvalError> {
        match c {
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            'A'..='Z' => {
                self.advance();
                self.read_cell_ref(c)
            }
            '0'..='9' | '.' => self.read_number(),
            _ => Err(EvalError::InvalidToken(c)),
        }
    }

    /// Read the row digits of a cell reference whose column letter has
    /// already been consumed.
    fn read_cell_ref(&mut self, letter: char) -> Result<Token, EvalError> {
        let col = col_from_label(letter).ok_or(EvalError::InvalidToken(letter))?;

        // The row digits must follow the letter immediately.
        match self.peek() {
            Some(next) if next.is_ascii_digit() => {}
            Some(next) => return Err(EvalError::InvalidToken(next)),
            None => return Err(EvalError::InvalidToken(letter)),
        }

        let mut digits = String::new();
        while let Some(next) = self.peek() {
            if next.is_ascii_digit() {
                digits.push(next);
                self.advance();
            } else {
                break;
            }
        }

        // Rows are 1-based in formulas; a digit run of 0 or one that
        // overflows u32 can never land inside the grid.
        let row: u32 = digits.parse().map_err(|_| EvalError::OutOfRange)?;
        if row == 0 {
            return Err(EvalError::OutOfRange);
        }

        let coord = CellCoord::new(row - 1, col);
        if !coord.in_bounds() {
            return Err(EvalError::OutOfRange);
        }

        Ok(Token::CellRef(coord))
    }

    fn read_number(&mut self) -> Result<Token, EvalError> {
        let mut s = String::new();
        let mut has_dot = false;

        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    s.push(c);
                    self.advance();
                }
                '.' if !has_dot => {
                    has_dot = true;
                    s.push(c);
                    self.advance();
                }
                _ => break,
            }
        }

        // A bare "." collects no digits and fails to parse.
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::InvalidToken('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens = Lexer::new("=A1+B2").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::CellRef(CellCoord::new(0, 0)),
                Token::Plus,
                Token::CellRef(CellCoord::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_literals_and_whitespace() {
        let tokens = Lexer::new("= 1.5 + 2 + .25").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.5),
                Token::Plus,
                Token::Number(2.0),
                Token::Plus,
                Token::Number(0.25),
            ]
        );
    }

    #[test]
    fn test_letter_must_be_followed_by_digit() {
        assert_eq!(
            Lexer::new("=A+1").tokenize(),
            Err(EvalError::InvalidToken('+'))
        );
        assert_eq!(
            Lexer::new("=AB1").tokenize(),
            Err(EvalError::InvalidToken('B'))
        );
        assert_eq!(
            Lexer::new("=A").tokenize(),
            Err(EvalError::InvalidToken('A'))
        );
        // Whitespace between letter and digits does not count as immediate.
        assert_eq!(
            Lexer::new("=A 1").tokenize(),
            Err(EvalError::InvalidToken(' '))
        );
    }

    #[test]
    fn test_out_of_range_references() {
        assert_eq!(Lexer::new("=Z99").tokenize(), Err(EvalError::OutOfRange));
        assert_eq!(Lexer::new("=A11").tokenize(), Err(EvalError::OutOfRange));
        assert_eq!(Lexer::new("=H1").tokenize(), Err(EvalError::OutOfRange));
        assert_eq!(Lexer::new("=A0").tokenize(), Err(EvalError::OutOfRange));
        // Digit run too large for u32.
        assert_eq!(
            Lexer::new("=A99999999999").tokenize(),
            Err(EvalError::OutOfRange)
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(
            Lexer::new("=a1").tokenize(),
            Err(EvalError::InvalidToken('a'))
        );
        assert_eq!(
            Lexer::new("=1-2").tokenize(),
            Err(EvalError::InvalidToken('-'))
        );
        assert_eq!(
            Lexer::new("=1+..").tokenize(),
            Err(EvalError::InvalidToken('.'))
        );
    }

    #[test]
    fn test_second_dot_starts_new_literal() {
        // "1.2.3" scans as 1.2 followed by .3, matching the original
        // model's strtod-driven behavior.
        let tokens = Lexer::new("=1.2.3").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(1.2), Token::Number(0.3)]);
    }
}
