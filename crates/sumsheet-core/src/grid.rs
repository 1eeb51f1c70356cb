use crate::cell::Cell;
use crate::coord::CellCoord;

/// Number of rows in the fixed grid (A1-notation rows 1..=10).
pub const NUM_ROWS: u32 = 10;
/// Number of columns in the fixed grid (columns A..=G).
pub const NUM_COLS: u32 = 7;

/// Fixed-size, dense cell storage.
///
/// The grid exclusively owns every cell string; accessors hand out owned
/// copies, never references that outlive the call. Construction always
/// allocates the full `NUM_ROWS * NUM_COLS` cells, so in-bounds access
/// cannot miss. Individual [`Cell`]s serialize; the grid itself does not.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        Grid {
            cells: vec![Cell::default(); (NUM_ROWS * NUM_COLS) as usize],
        }
    }

    fn index(coord: CellCoord) -> usize {
        assert!(
            coord.in_bounds(),
            "coordinate {} outside the {}x{} grid",
            coord,
            NUM_ROWS,
            NUM_COLS
        );
        (coord.row * NUM_COLS + coord.col) as usize
    }

    /// Get the cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is outside the grid.
    pub fn cell(&self, coord: CellCoord) -> &Cell {
        &self.cells[Self::index(coord)]
    }

    /// Get the cell at `coord` mutably.
    ///
    /// # Panics
    /// Panics if `coord` is outside the grid.
    pub fn cell_mut(&mut self, coord: CellCoord) -> &mut Cell {
        &mut self.cells[Self::index(coord)]
    }

    /// Replace the cell at `coord`.
    pub fn set(&mut self, coord: CellCoord, cell: Cell) {
        self.cells[Self::index(coord)] = cell;
    }

    /// Reset the cell at `coord` to empty, dropping its string and any
    /// retained formula.
    pub fn clear(&mut self, coord: CellCoord) {
        self.cells[Self::index(coord)] = Cell::default();
    }

    /// The numeric value a formula reference reads at `coord`.
    pub fn value_of(&self, coord: CellCoord) -> f64 {
        self.cell(coord).value.as_number()
    }

    /// An owned copy of the display text at `coord` ("" for empty cells).
    pub fn display_text(&self, coord: CellCoord) -> String {
        self.cell(coord).value.display().to_string()
    }

    /// All coordinates in row-major order (row outer ascending, column
    /// inner ascending). Recalculation scan order depends on this.
    pub fn coords() -> impl Iterator<Item = CellCoord> {
        (0..NUM_ROWS).flat_map(|row| (0..NUM_COLS).map(move |col| CellCoord::new(row, col)))
    }
}
