use sumsheet_core::CellCoord;

/// Receives the post-update textual representation of a changed cell.
///
/// This is the only seam between the data model and a presentation layer:
/// the engine never renders, persists or defines a wire format. The
/// notifier is borrowed mutably for the duration of a write, so it cannot
/// re-enter the spreadsheet.
pub trait DisplayNotifier {
    fn on_cell_changed(&mut self, coord: CellCoord, display_text: &str);
}

/// Closures work as notifiers directly.
impl<F> DisplayNotifier for F
where
    F: FnMut(CellCoord, &str),
{
    fn on_cell_changed(&mut self, coord: CellCoord, display_text: &str) {
        self(coord, display_text)
    }
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl DisplayNotifier for NullNotifier {
    fn on_cell_changed(&mut self, _coord: CellCoord, _display_text: &str) {}
}
