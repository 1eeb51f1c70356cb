//! Input classification: decide whether raw cell input is a plain number,
//! a formula candidate, or free text.

/// What a raw input string parses as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A plain decimal number.
    Number,
    /// Matches the formula grammar; evaluation may still fail.
    FormulaCandidate,
    /// Anything else, stored verbatim.
    Text,
}

/// Classify raw cell input.
///
/// The numeric test runs first; input that fails it is re-tested against
/// the formula grammar, and only then falls back to plain text.
pub fn classify(text: &str) -> InputKind {
    if is_valid_number(text) {
        InputKind::Number
    } else if is_valid_formula(text) {
        InputKind::FormulaCandidate
    } else {
        InputKind::Text
    }
}

/// Check for a plain decimal number: surrounding whitespace allowed, then
/// only digits and at most one decimal point, with at least one digit.
/// No sign, no exponent, no embedded whitespace.
pub fn is_valid_number(text: &str) -> bool {
    let text = text.trim();

    let mut has_digit = false;
    let mut has_decimal_point = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if c == '.' {
            if has_decimal_point {
                return false;
            }
            has_decimal_point = true;
        } else {
            return false;
        }
    }

    has_digit
}

/// Check the formula grammar: `=` first, then only uppercase letters,
/// digits, `.`, `+` and whitespace.
///
/// A lowercase letter anywhere invalidates the formula. Case sensitivity
/// is a deliberate quirk carried over from the original model, not a bug.
pub fn is_valid_formula(text: &str) -> bool {
    let text = text.trim_start();

    let Some(rest) = text.strip_prefix('=') else {
        return false;
    };

    for c in rest.chars() {
        if c.is_whitespace() {
            continue;
        }
        match c {
            'A'..='Z' | '0'..='9' | '.' | '+' => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_number("42"));
        assert!(is_valid_number("3.14"));
        assert!(is_valid_number(".5"));
        assert!(is_valid_number("5."));
        assert!(is_valid_number("  42  "));
        assert!(is_valid_number("007"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("   "));
        assert!(!is_valid_number(".")); // no digit
        assert!(!is_valid_number("1.2.3")); // two decimal points
        assert!(!is_valid_number("-1")); // no sign allowed
        assert!(!is_valid_number("+1"));
        assert!(!is_valid_number("1e5")); // no exponent
        assert!(!is_valid_number("1 2")); // embedded whitespace
        assert!(!is_valid_number("42x"));
    }

    #[test]
    fn test_valid_formulas() {
        assert!(is_valid_formula("=A1"));
        assert!(is_valid_formula("=A1+B2"));
        assert!(is_valid_formula("= A1 + 2.5"));
        assert!(is_valid_formula("  =Z99"));
        assert!(is_valid_formula("=")); // grammar only; arity fails later
    }

    #[test]
    fn test_lowercase_rejected_anywhere() {
        assert!(!is_valid_formula("=a1"));
        assert!(!is_valid_formula("=A1+b2"));
        assert!(!is_valid_formula("=A1+B2x"));
    }

    #[test]
    fn test_invalid_formula_characters() {
        assert!(!is_valid_formula("A1+B2")); // missing '='
        assert!(!is_valid_formula("=A1-B2")); // only '+' is an operator
        assert!(!is_valid_formula("=A1*2"));
        assert!(!is_valid_formula("=SUM(A1)")); // no function calls
        assert!(!is_valid_formula("=A1,B2"));
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(classify("42"), InputKind::Number);
        assert_eq!(classify(" 3.5 "), InputKind::Number);
        assert_eq!(classify("=A1+B2"), InputKind::FormulaCandidate);
        assert_eq!(classify("=a1"), InputKind::Text); // lowercase formula is text
        assert_eq!(classify("hello"), InputKind::Text);
        assert_eq!(classify("-1"), InputKind::Text); // signed numbers are text
    }
}
