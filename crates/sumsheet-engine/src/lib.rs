pub mod notifier;
pub mod sheet;

pub use notifier::{DisplayNotifier, NullNotifier};
pub use sheet::{Spreadsheet, ERROR_MARKER};
