//! Error writeback: render accumulated field errors onto a workbook copy.

use tracing::{debug, info};

use docbind_model::{CancelToken, FieldError};
use docbind_sheet::Workbook;

use crate::ReportError;

/// Approximate character width used to size note boxes, in pixels.
pub const NOTE_CHAR_WIDTH_PX: u32 = 7;
/// Approximate line height used to size note boxes, in pixels.
pub const NOTE_CHAR_HEIGHT_PX: u32 = 20;
/// Padding added to both note dimensions, in pixels.
pub const NOTE_PADDING_PX: u32 = 10;
/// Solid fill applied to cells carrying errors.
pub const ERROR_FILL_ARGB: &str = "FFFF0000";

/// All messages attached to one distinct (sheet, cell), encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellErrors<'a> {
    pub sheet: &'a str,
    pub cell: &'a str,
    pub messages: Vec<&'a str>,
}

impl CellErrors<'_> {
    pub fn note_body(&self) -> String {
        self.messages.join("\n")
    }
}

/// Group errors by sheet, then by cell reference, preserving the order in
/// which sheets and cells were first encountered.
pub fn group_by_cell(errors: &[FieldError]) -> Vec<CellErrors<'_>> {
    let mut sheets: Vec<&str> = Vec::new();
    for error in errors {
        if !sheets.contains(&error.sheet.as_str()) {
            sheets.push(&error.sheet);
        }
    }

    let mut groups: Vec<CellErrors<'_>> = Vec::new();
    for sheet in sheets {
        let start = groups.len();
        for error in errors.iter().filter(|error| error.sheet == sheet) {
            match groups[start..]
                .iter_mut()
                .find(|group| group.cell == error.cell)
            {
                Some(group) => group.messages.push(&error.message),
                None => groups.push(CellErrors {
                    sheet,
                    cell: &error.cell,
                    messages: vec![&error.message],
                }),
            }
        }
    }
    groups
}

/// Deterministic note-box size for a message body, in pixels.
pub fn note_size(body: &str) -> (u32, u32) {
    let mut lines: u32 = 0;
    let mut longest: u32 = 0;
    for line in body.split('\n') {
        lines += 1;
        longest = longest.max(line.chars().count() as u32);
    }
    (
        longest * NOTE_CHAR_WIDTH_PX + NOTE_PADDING_PX,
        lines * NOTE_CHAR_HEIGHT_PX + NOTE_PADDING_PX,
    )
}

/// Style and annotate every errored cell, then serialize the workbook.
///
/// Each distinct cell gets the error fill once and a single note holding
/// all of its messages newline-joined in encounter order. Errors naming a
/// sheet the workbook does not have are skipped. With no errors at all the
/// call returns `Ok(None)` rather than an unchanged document.
pub fn annotate_errors(
    book: &mut dyn Workbook,
    errors: &[FieldError],
    cancel: &CancelToken,
) -> Result<Option<Vec<u8>>, ReportError> {
    if cancel.is_cancelled() {
        return Err(ReportError::Cancelled);
    }
    if errors.is_empty() {
        return Ok(None);
    }

    let groups = group_by_cell(errors);
    let mut annotated = 0usize;
    for group in &groups {
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        if !book.has_sheet(group.sheet) {
            debug!(sheet = %group.sheet, "skipping errors for absent sheet");
            continue;
        }
        let body = group.note_body();
        let (width, height) = note_size(&body);
        book.fill_cell(group.sheet, group.cell, ERROR_FILL_ARGB)?;
        book.add_note(group.sheet, group.cell, &body, width, height)?;
        annotated += 1;
    }

    info!(cells = annotated, errors = errors.len(), "error writeback complete");
    Ok(Some(book.save_to_bytes()?))
}
