//! Protected key-sheet seeding: the writer half of the template-key gate.

use tracing::info;

use docbind_model::constants::{KEY_CELL, KEY_SHEET_NAME, KEY_SHEET_PASSWORD, TEMPLATE_KEY};
use docbind_sheet::Workbook;

use crate::ReportError;

const KEY_CAMOUFLAGE_ARGB: &str = "FFFFFFFF";

/// Add the hidden, protected key sheet to a template workbook.
///
/// The key cell is rendered white-on-white so the value stays invisible
/// even if the sheet is unhidden. Returns false (workbook untouched) when
/// the key sheet already exists.
pub fn seed_key_sheet(book: &mut dyn Workbook) -> Result<bool, ReportError> {
    if book.has_sheet(KEY_SHEET_NAME) {
        return Ok(false);
    }
    book.add_sheet(KEY_SHEET_NAME)?;
    book.set_cell_text_at(KEY_SHEET_NAME, KEY_CELL, TEMPLATE_KEY)?;
    book.set_font_color(KEY_SHEET_NAME, KEY_CELL, KEY_CAMOUFLAGE_ARGB)?;
    book.fill_cell(KEY_SHEET_NAME, KEY_CELL, KEY_CAMOUFLAGE_ARGB)?;
    book.protect_sheet(KEY_SHEET_NAME, KEY_SHEET_PASSWORD)?;
    book.hide_sheet(KEY_SHEET_NAME)?;
    info!("protected key sheet seeded");
    Ok(true)
}
