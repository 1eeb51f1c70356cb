use sumsheet_core::{classify, format_number, Cell, CellCoord, CellValue, Grid, InputKind};
use sumsheet_formula::evaluate_formula;

use crate::notifier::DisplayNotifier;

/// The single user-visible marker every formula failure collapses to.
pub const ERROR_MARKER: &str = "ERROR";

/// A fixed-size spreadsheet: grid storage plus the write/recalculate loop.
///
/// Single-threaded and synchronous; every operation runs to completion
/// before returning. All side effects reach the outside world through the
/// [`DisplayNotifier`].
pub struct Spreadsheet<N: DisplayNotifier> {
    grid: Grid,
    notifier: N,
}

impl<N: DisplayNotifier> Spreadsheet<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            grid: Grid::new(),
            notifier,
        }
    }

    /// Read-only access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An owned copy of the display text at `coord` ("" for empty cells).
    pub fn display_text(&self, coord: CellCoord) -> String {
        self.grid.display_text(coord)
    }

    /// Write raw input to a cell: classify, store, recalculate every other
    /// live formula cell, then notify.
    ///
    /// Empty input is a no-op. Notifications fire for each recalculated
    /// formula cell in row-major order, then for the written cell.
    pub fn set_cell_value(&mut self, coord: CellCoord, text: &str) {
        if text.is_empty() {
            return;
        }
        tracing::debug!(%coord, input = text, "cell write");

        match classify(text) {
            InputKind::Number => {
                let cell = match text.trim().parse::<f64>() {
                    Ok(value) => Cell::number(value, text),
                    Err(_) => Cell::text(text),
                };
                self.grid.set(coord, cell);
            }
            InputKind::Text => {
                self.grid.set(coord, Cell::text(text));
            }
            InputKind::FormulaCandidate => {
                // Commit the verbatim text first: evaluation runs on top of
                // the committed storage, so a self-reference reads the
                // fresh cell (numeric value 0), not its previous value.
                self.grid.set(coord, Cell::text(text));
                match evaluate_formula(text, |c| self.grid.value_of(c)) {
                    Ok(result) => {
                        self.grid.set(coord, Cell::formula_result(text, result));
                    }
                    Err(err) => {
                        tracing::debug!(%coord, %err, "formula rejected at write");
                        self.grid.set(coord, Cell::text(ERROR_MARKER));
                    }
                }
            }
        }

        self.recalculate_others(coord);

        let display = self.grid.display_text(coord);
        self.notifier.on_cell_changed(coord, &display);
    }

    /// Reset a cell to empty and notify with empty display text.
    /// No-op if the cell is already empty.
    pub fn clear_cell(&mut self, coord: CellCoord) {
        if self.grid.cell(coord).is_empty() {
            return;
        }
        tracing::debug!(%coord, "cell cleared");

        self.grid.clear(coord);
        self.notifier.on_cell_changed(coord, "");
    }

    /// Full, unconditional rescan of the grid after a write at `written`:
    /// every other live formula cell is re-evaluated against current grid
    /// state, whether or not anything it references changed.
    fn recalculate_others(&mut self, written: CellCoord) {
        for coord in Grid::coords() {
            if coord == written {
                continue;
            }
            self.recalculate_cell(coord);
        }
    }

    /// Re-run one live formula cell from its retained source, then notify.
    /// Cells without a retained formula are left untouched.
    fn recalculate_cell(&mut self, coord: CellCoord) {
        let Some(source) = self.grid.cell(coord).formula.clone() else {
            return;
        };

        match evaluate_formula(&source, |c| self.grid.value_of(c)) {
            Ok(result) => {
                self.grid.cell_mut(coord).value = CellValue::Number {
                    value: result,
                    display: format_number(result),
                };
            }
            Err(err) => {
                tracing::debug!(%coord, %err, "formula failed during recalculation");
                // The marker is display-only: the last valid numeric value
                // stays readable by other formulas, and the retained source
                // keeps the cell live for later passes.
                if let CellValue::Number { display, .. } = &mut self.grid.cell_mut(coord).value {
                    *display = ERROR_MARKER.to_string();
                }
            }
        }

        let display = self.grid.display_text(coord);
        self.notifier.on_cell_changed(coord, &display);
    }
}
