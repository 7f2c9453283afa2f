//! Anti-tamper gate for protected templates.

use tracing::debug;

use docbind_model::constants::{KEY_CELL, KEY_SHEET_NAME, KEY_SHEET_PASSWORD, TEMPLATE_KEY};
use docbind_sheet::Workbook;

/// Check a workbook's hidden key sheet against the fixed template key.
///
/// The sheet must exist, be protected, unprotect with the fixed password,
/// and carry the expected key in the fixed cell. Any deviation — including
/// a sheet that was left unprotected — fails the check. Runs before any
/// data is read; a failure is a structural failure for the import.
pub fn validate_template_key(book: &mut dyn Workbook) -> bool {
    match book.is_sheet_protected(KEY_SHEET_NAME) {
        Ok(true) => {}
        _ => {
            debug!("key sheet missing or not protected");
            return false;
        }
    }
    if book
        .unprotect_sheet(KEY_SHEET_NAME, KEY_SHEET_PASSWORD)
        .is_err()
    {
        debug!("key sheet password mismatch");
        return false;
    }
    matches!(book.cell_text_at(KEY_SHEET_NAME, KEY_CELL), Ok(value) if value == TEMPLATE_KEY)
}
