//! Column merging for rendered exports.
//!
//! After the template engine expands its rows, repeated values in grouped
//! columns are merged vertically so the output reads like a grouped table.

use docbind_model::{GroupMode, cell_name};
use docbind_sheet::Workbook;

use crate::ReportError;

/// Rectangular region of rendered rows, header row included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion {
    pub first_row: u32,
    pub first_column: u32,
    pub row_count: u32,
}

/// Merge cells of the given columns inside a rendered region.
///
/// `All` merges each column across the whole data area below the header.
/// `ValueRuns` scans the region's first column and merges per run of rows
/// delimited by non-empty anchor values. Regions with two rows or fewer
/// are left untouched.
pub fn group_columns(
    book: &mut dyn Workbook,
    sheet: &str,
    region: &GridRegion,
    columns: &[u32],
    mode: GroupMode,
) -> Result<(), ReportError> {
    if region.row_count <= 2 {
        return Ok(());
    }
    let first_data_row = region.first_row + 1;
    let last_row = region.first_row + region.row_count - 1;

    match mode {
        GroupMode::All => {
            for col in columns {
                merge_rows(book, sheet, first_data_row, last_row, *col)?;
            }
        }
        GroupMode::ValueRuns => {
            let runs = value_runs(book, sheet, region.first_column, first_data_row, last_row)?;
            for (start, end) in runs {
                if end == start {
                    continue;
                }
                for col in columns {
                    merge_rows(book, sheet, start, end, *col)?;
                }
            }
        }
    }
    Ok(())
}

/// Runs of rows owned by each non-empty anchor value in the anchor column.
fn value_runs(
    book: &dyn Workbook,
    sheet: &str,
    anchor_column: u32,
    first_row: u32,
    last_row: u32,
) -> Result<Vec<(u32, u32)>, ReportError> {
    let mut runs = Vec::new();
    let mut current: Option<u32> = None;
    for row in first_row..=last_row {
        let text = book.cell_text(sheet, row, anchor_column)?;
        if !text.is_empty() {
            if let Some(start) = current.take() {
                runs.push((start, row - 1));
            }
            current = Some(row);
        }
    }
    if let Some(start) = current {
        runs.push((start, last_row));
    }
    Ok(runs)
}

fn merge_rows(
    book: &mut dyn Workbook,
    sheet: &str,
    first_row: u32,
    last_row: u32,
    col: u32,
) -> Result<(), ReportError> {
    let range = format!("{}:{}", cell_name(first_row, col), cell_name(last_row, col));
    book.merge_range(sheet, &range)?;
    Ok(())
}
