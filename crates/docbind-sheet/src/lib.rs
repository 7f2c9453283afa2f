//! The spreadsheet collaborator.
//!
//! The binding/validation core never touches a spreadsheet library
//! directly; it consumes the narrow [`Workbook`] interface below. The
//! default implementation is [`UmyaWorkbook`], backed by `umya-spreadsheet`.

mod umya;

pub use umya::UmyaWorkbook;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("worksheet not found: {0}")]
    SheetNotFound(String),
    #[error("worksheet already exists: {0}")]
    SheetExists(String),
    #[error("worksheet is not protected: {0}")]
    NotProtected(String),
    #[error("invalid protection password for worksheet {0}")]
    BadPassword(String),
    #[error("invalid cell reference: {0}")]
    BadCellReference(String),
    #[error("workbook read error: {0}")]
    Read(String),
    #[error("workbook write error: {0}")]
    Write(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Primitive workbook operations the core consumes.
///
/// Rows and columns are zero-based; `cell` parameters take A1-style
/// references. Implementations hold the whole workbook in memory; mutations
/// become visible to readers immediately and persist via `save_to_bytes`.
pub trait Workbook {
    fn sheet_names(&self) -> Vec<String>;

    fn has_sheet(&self, sheet: &str) -> bool;

    /// Last populated (row, column) of a sheet, or `None` when the sheet
    /// holds no data.
    fn data_bounds(&self, sheet: &str) -> Result<Option<(u32, u32)>, SheetError>;

    /// Text of a cell; empty string for blank cells.
    fn cell_text(&self, sheet: &str, row: u32, col: u32) -> Result<String, SheetError>;

    fn cell_text_at(&self, sheet: &str, cell: &str) -> Result<String, SheetError>;

    fn set_cell_text(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        value: &str,
    ) -> Result<(), SheetError>;

    fn set_cell_text_at(&mut self, sheet: &str, cell: &str, value: &str)
    -> Result<(), SheetError>;

    /// Apply a solid fill of the given ARGB color to a cell.
    fn fill_cell(&mut self, sheet: &str, cell: &str, argb: &str) -> Result<(), SheetError>;

    fn set_font_color(&mut self, sheet: &str, cell: &str, argb: &str) -> Result<(), SheetError>;

    /// Attach a note to a cell with an explicit box size in pixels.
    fn add_note(
        &mut self,
        sheet: &str,
        cell: &str,
        body: &str,
        width_px: u32,
        height_px: u32,
    ) -> Result<(), SheetError>;

    /// Merge an A1-style range such as `"B2:B7"`.
    fn merge_range(&mut self, sheet: &str, range: &str) -> Result<(), SheetError>;

    fn add_sheet(&mut self, name: &str) -> Result<(), SheetError>;

    fn hide_sheet(&mut self, name: &str) -> Result<(), SheetError>;

    fn protect_sheet(&mut self, name: &str, password: &str) -> Result<(), SheetError>;

    /// Remove protection after verifying the password. Errors when the
    /// sheet is absent, not protected, or the password does not match.
    fn unprotect_sheet(&mut self, name: &str, password: &str) -> Result<(), SheetError>;

    fn is_sheet_protected(&self, name: &str) -> Result<bool, SheetError>;

    fn save_to_bytes(&self) -> Result<Vec<u8>, SheetError>;
}
