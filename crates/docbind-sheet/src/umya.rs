use std::io::Cursor;
use std::path::Path;

use umya_spreadsheet::{Comment, SheetProtection, Spreadsheet, Worksheet};

use docbind_model::parse_cell_name;

use crate::{SheetError, Workbook};

// Note-box geometry: the anchor works in grid units, so pixel sizes are
// mapped with nominal column/row extents.
const ANCHOR_COLUMN_WIDTH_PX: u32 = 64;
const ANCHOR_ROW_HEIGHT_PX: u32 = 20;

/// In-memory workbook backed by `umya-spreadsheet`.
pub struct UmyaWorkbook {
    book: Spreadsheet,
}

impl UmyaWorkbook {
    /// Fresh workbook with the default `Sheet1`.
    pub fn new() -> Self {
        Self {
            book: umya_spreadsheet::new_file(),
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, SheetError> {
        let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(data), true)
            .map_err(|error| SheetError::Read(format!("{error:?}")))?;
        Ok(Self { book })
    }

    pub fn from_path(path: &Path) -> Result<Self, SheetError> {
        let book = umya_spreadsheet::reader::xlsx::read(path)
            .map_err(|error| SheetError::Read(format!("{error:?}")))?;
        Ok(Self { book })
    }

    fn sheet(&self, name: &str) -> Result<&Worksheet, SheetError> {
        self.book
            .get_sheet_by_name(name)
            .ok_or_else(|| SheetError::SheetNotFound(name.to_string()))
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet, SheetError> {
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| SheetError::SheetNotFound(name.to_string()))
    }
}

impl Default for UmyaWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook for UmyaWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name().to_string())
            .collect()
    }

    fn has_sheet(&self, sheet: &str) -> bool {
        self.book.get_sheet_by_name(sheet).is_some()
    }

    fn data_bounds(&self, sheet: &str) -> Result<Option<(u32, u32)>, SheetError> {
        let worksheet = self.sheet(sheet)?;
        let (col, row) = worksheet.get_highest_column_and_row();
        if row == 0 || col == 0 {
            return Ok(None);
        }
        Ok(Some((row - 1, col - 1)))
    }

    fn cell_text(&self, sheet: &str, row: u32, col: u32) -> Result<String, SheetError> {
        Ok(self.sheet(sheet)?.get_value((col + 1, row + 1)))
    }

    fn cell_text_at(&self, sheet: &str, cell: &str) -> Result<String, SheetError> {
        let worksheet = self.sheet(sheet)?;
        Ok(worksheet.get_value(cell))
    }

    fn set_cell_text(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        value: &str,
    ) -> Result<(), SheetError> {
        self.sheet_mut(sheet)?
            .get_cell_mut((col + 1, row + 1))
            .set_value(value);
        Ok(())
    }

    fn set_cell_text_at(
        &mut self,
        sheet: &str,
        cell: &str,
        value: &str,
    ) -> Result<(), SheetError> {
        self.sheet_mut(sheet)?.get_cell_mut(cell).set_value(value);
        Ok(())
    }

    fn fill_cell(&mut self, sheet: &str, cell: &str, argb: &str) -> Result<(), SheetError> {
        self.sheet_mut(sheet)?
            .get_style_mut(cell)
            .set_background_color(argb);
        Ok(())
    }

    fn set_font_color(&mut self, sheet: &str, cell: &str, argb: &str) -> Result<(), SheetError> {
        self.sheet_mut(sheet)?
            .get_style_mut(cell)
            .get_font_mut()
            .get_color_mut()
            .set_argb(argb);
        Ok(())
    }

    fn add_note(
        &mut self,
        sheet: &str,
        cell: &str,
        body: &str,
        width_px: u32,
        height_px: u32,
    ) -> Result<(), SheetError> {
        let (row, col) = parse_cell_name(cell)
            .ok_or_else(|| SheetError::BadCellReference(cell.to_string()))?;
        let worksheet = self.sheet_mut(sheet)?;

        let mut comment = Comment::default();
        comment.get_coordinate_mut().set_col_num(col + 1);
        comment.get_coordinate_mut().set_row_num(row + 1);
        comment.get_text_mut().set_text_string(body);

        let anchor = comment.get_anchor_mut();
        anchor.set_left_column(col + 1);
        anchor.set_top_row(row);
        anchor.set_right_column(col + 2 + width_px / ANCHOR_COLUMN_WIDTH_PX);
        anchor.set_bottom_row(row + 1 + height_px / ANCHOR_ROW_HEIGHT_PX);

        worksheet.add_comments(comment);
        Ok(())
    }

    fn merge_range(&mut self, sheet: &str, range: &str) -> Result<(), SheetError> {
        self.sheet_mut(sheet)?.add_merge_cells(range);
        Ok(())
    }

    fn add_sheet(&mut self, name: &str) -> Result<(), SheetError> {
        if self.has_sheet(name) {
            return Err(SheetError::SheetExists(name.to_string()));
        }
        self.book
            .new_sheet(name)
            .map_err(|error| SheetError::Write(error.to_string()))?;
        Ok(())
    }

    fn hide_sheet(&mut self, name: &str) -> Result<(), SheetError> {
        self.sheet_mut(name)?
            .set_sheet_state(String::from("hidden"));
        Ok(())
    }

    fn protect_sheet(&mut self, name: &str, password: &str) -> Result<(), SheetError> {
        let protection = self.sheet_mut(name)?.get_sheet_protection_mut();
        protection.set_password(password);
        protection.set_sheet(true);
        protection.set_objects(true);
        protection.set_scenarios(true);
        Ok(())
    }

    fn unprotect_sheet(&mut self, name: &str, password: &str) -> Result<(), SheetError> {
        let stored = {
            let worksheet = self.sheet(name)?;
            match worksheet.get_sheet_protection() {
                Some(protection) if *protection.get_sheet() => {
                    protection.get_password().to_string()
                }
                _ => return Err(SheetError::NotProtected(name.to_string())),
            }
        };
        // Passwords are stored hashed; hash the supplied one the same way
        // and compare, instead of depending on the hash algorithm here.
        let mut probe = SheetProtection::default();
        probe.set_password(password);
        if !stored.eq_ignore_ascii_case(probe.get_password()) {
            return Err(SheetError::BadPassword(name.to_string()));
        }
        self.sheet_mut(name)?
            .get_sheet_protection_mut()
            .set_sheet(false);
        Ok(())
    }

    fn is_sheet_protected(&self, name: &str) -> Result<bool, SheetError> {
        let worksheet = self.sheet(name)?;
        Ok(worksheet
            .get_sheet_protection()
            .map(|protection| *protection.get_sheet())
            .unwrap_or(false))
    }

    fn save_to_bytes(&self) -> Result<Vec<u8>, SheetError> {
        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&self.book, &mut cursor)
            .map_err(|error| SheetError::Write(format!("{error:?}")))?;
        Ok(cursor.into_inner())
    }
}
