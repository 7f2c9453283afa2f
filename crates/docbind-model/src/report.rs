use crate::error::FieldError;

/// One imported row: the bound record plus the errors its own unit of work
/// produced. Never mutated after the row pass completes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRecord<T> {
    /// Zero-based sheet row the record was read from.
    pub row: u32,
    pub record: T,
    pub errors: Vec<FieldError>,
}

impl<T> ImportedRecord<T> {
    pub fn new(row: u32, record: T) -> Self {
        Self {
            row,
            record,
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Outcome of one import call.
///
/// Exactly one of `error` (structural failure, nothing was read) or
/// `records` is populated. `success` is true iff no record carries a field
/// error; it is computed once after the whole sheet has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport<T> {
    pub success: bool,
    pub records: Option<Vec<ImportedRecord<T>>>,
    pub error: Option<String>,
    pub sheet_name: String,
    pub last_column: Option<u32>,
}

impl<T> ImportReport<T> {
    /// Structural failure: the sheet was never read.
    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            success: false,
            records: None,
            error: Some(code.into()),
            sheet_name: String::new(),
            last_column: None,
        }
    }

    /// Completed pass; success is derived from the per-record error lists.
    pub fn completed(
        records: Vec<ImportedRecord<T>>,
        sheet_name: impl Into<String>,
        last_column: u32,
    ) -> Self {
        let success = records.iter().all(|record| !record.has_errors());
        Self {
            success,
            records: Some(records),
            error: None,
            sheet_name: sheet_name.into(),
            last_column: Some(last_column),
        }
    }

    /// Recompute `success` after collection-level validators have run.
    pub fn recheck(&mut self) {
        if let Some(records) = &self.records {
            self.success = records.iter().all(|record| !record.has_errors());
        }
    }

    /// All field errors across the collection, in row-then-column order.
    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.records
            .iter()
            .flatten()
            .flat_map(|record| record.errors.iter())
    }
}
