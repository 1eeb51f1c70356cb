use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::{NUM_COLS, NUM_ROWS};

/// Cell coordinate (0-indexed internally).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        CellCoord { row, col }
    }

    /// Create from A1 notation (e.g. "A1" -> (0, 0), "B2" -> (1, 1)).
    ///
    /// Columns are a single letter since the formula grammar only admits
    /// single-letter references.
    pub fn from_a1(notation: &str) -> Option<Self> {
        let notation = notation.trim();
        let mut chars = notation.chars();

        let col = col_from_label(chars.next()?)?;
        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let row: u32 = row_str.parse().ok()?;
        if row == 0 {
            return None; // Rows are 1-indexed in A1 notation
        }

        Some(CellCoord { row: row - 1, col })
    }

    /// Convert to A1 notation (e.g. (0, 0) -> "A1").
    pub fn to_a1(&self) -> String {
        match col_to_label(self.col) {
            Some(label) => format!("{}{}", label, self.row + 1),
            None => format!("R{}C{}", self.row, self.col),
        }
    }

    /// Check whether this coordinate lies inside the fixed grid.
    pub fn in_bounds(&self) -> bool {
        self.row < NUM_ROWS && self.col < NUM_COLS
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// Convert a single column letter (A..=Z) to a 0-indexed column.
pub fn col_from_label(label: char) -> Option<u32> {
    if label.is_ascii_uppercase() {
        Some(label as u32 - 'A' as u32)
    } else {
        None
    }
}

/// Convert a 0-indexed column to its letter (A..=Z).
pub fn col_to_label(col: u32) -> Option<char> {
    if col < 26 {
        char::from_u32('A' as u32 + col)
    } else {
        None
    }
}
