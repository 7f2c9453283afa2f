pub mod annotate;
pub mod groups;
pub mod protect;

pub use annotate::{
    CellErrors, ERROR_FILL_ARGB, NOTE_CHAR_HEIGHT_PX, NOTE_CHAR_WIDTH_PX, NOTE_PADDING_PX,
    annotate_errors, group_by_cell, note_size,
};
pub use groups::{GridRegion, group_columns};
pub use protect::seed_key_sheet;

use thiserror::Error;

use docbind_sheet::SheetError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("writeback cancelled")]
    Cancelled,
    #[error(transparent)]
    Sheet(#[from] SheetError),
}
