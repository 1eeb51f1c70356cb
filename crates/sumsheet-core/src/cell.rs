use serde::{Deserialize, Serialize};

/// The value stored in a cell.
///
/// A formula is not a persisted variant: during a write it collapses to
/// `Number` (holding the computed result) or to the `"ERROR"` text marker
/// before the write returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CellValue {
    Empty,
    Text {
        text: String,
    },
    Number {
        value: f64,
        /// Canonical display text: the user's original input, or the
        /// formatted formula result.
        display: String,
    },
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The numeric value a formula reference reads: `Number` cells yield
    /// their value, everything else reads as 0.
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number { value, .. } => *value,
            _ => 0.0,
        }
    }

    /// The stored display text ("" for empty cells).
    pub fn display(&self) -> &str {
        match self {
            CellValue::Empty => "",
            CellValue::Text { text } => text,
            CellValue::Number { display, .. } => display,
        }
    }
}

/// A single grid cell.
///
/// `formula` retains the original source for live formula-result cells, so
/// the recalculation pass can re-evaluate them after any later write. It is
/// `Some` only when the last write was a formula that evaluated
/// successfully.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Cell {
    /// A plain number, keeping the user's original input as display text.
    pub fn number(value: f64, display: impl Into<String>) -> Self {
        Cell {
            value: CellValue::Number {
                value,
                display: display.into(),
            },
            formula: None,
        }
    }

    /// A plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            value: CellValue::Text { text: text.into() },
            formula: None,
        }
    }

    /// A live formula-result cell: the computed value plus the retained
    /// formula source.
    pub fn formula_result(source: impl Into<String>, value: f64) -> Self {
        Cell {
            value: CellValue::Number {
                value,
                display: format_number(value),
            },
            formula: Some(source.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Format a numeric value for display.
///
/// Integral values render without a fractional part; everything else uses
/// the shortest `f64` representation.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(Cell::number(42.0, "42").value.as_number(), 42.0);
        assert_eq!(Cell::text("hello").value.as_number(), 0.0);
        assert_eq!(CellValue::Empty.as_number(), 0.0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(CellValue::Empty.display(), "");
        assert_eq!(Cell::text("hi").value.display(), "hi");
        // Plain numbers keep the user's original spelling.
        assert_eq!(Cell::number(7.0, " 7.0 ").value.display(), " 7.0 ");
        // Formula results use the formatted value.
        assert_eq!(Cell::formula_result("=3+4", 7.0).value.display(), "7");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1e16), "10000000000000000");
    }

    #[test]
    fn test_formula_retention() {
        let cell = Cell::formula_result("=A1+B2", 7.0);
        assert_eq!(cell.formula.as_deref(), Some("=A1+B2"));
        assert!(Cell::number(1.0, "1").formula.is_none());
        assert!(Cell::text("ERROR").formula.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let cell = Cell::formula_result("=A1+2", 5.0);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);

        let empty: Cell = serde_json::from_str(r#"{"value":{"type":"Empty"}}"#).unwrap();
        assert!(empty.is_empty());
        assert!(empty.formula.is_none());
    }
}
