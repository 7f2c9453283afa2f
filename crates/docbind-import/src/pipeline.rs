//! Import orchestration.
//!
//! One pipeline instance per call: ResolveSchema -> (optional)
//! ValidateTemplateKey -> OpenSheet -> BuildHeaderMap -> per-row/per-cell
//! Coerce -> Validate -> CollectRecord -> Finalize. Structural failures
//! short-circuit before any row is read; per-field failures never abort the
//! pass. Each row's unit of work produces its own error list, merged here
//! at a single aggregation point.

use thiserror::Error;
use tracing::{debug, info};

use docbind_model::{
    CancelToken, FieldError, FieldValue, ImportReport, ImportedRecord, RecordSchema, cell_name,
    messages,
};
use docbind_sheet::{SheetError, Workbook};
use docbind_validate::RuleEngine;

use crate::coerce::{coerce, type_mismatch_message};
use crate::header::resolve_headers;
use crate::template_key::validate_template_key;
use crate::unique::UniquenessTracker;

/// What happens when two header columns resolve to the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateHeaderPolicy {
    /// Keep both columns mapped; the later column's value wins.
    #[default]
    LastWins,
    /// Treat the duplicate as a structural failure.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Validate the hidden key sheet before reading any data.
    pub check_template_key: bool,
    pub duplicate_headers: DuplicateHeaderPolicy,
}

#[derive(Debug, Error)]
pub enum ImportError {
    /// The cancellation token fired. Work already done is discarded; no
    /// partial result is observable.
    #[error("import cancelled")]
    Cancelled,
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

/// Collection-level validator run after the sheet pass, e.g. cross-record
/// consistency checks. Errors are appended to the owning records.
pub trait RecordsValidator<T> {
    fn validate(&self, records: &mut Vec<ImportedRecord<T>>, sheet_name: &str, last_column: u32);
}

/// Import one sheet into typed records with per-cell error reporting.
pub fn import_sheet<T: Default>(
    book: &mut dyn Workbook,
    schema: &RecordSchema<T>,
    options: &ImportOptions,
    cancel: &CancelToken,
) -> Result<ImportReport<T>, ImportError> {
    ensure_active(cancel)?;
    let descriptor = &schema.sheet;

    if options.check_template_key && !validate_template_key(book) {
        info!(sheet = %descriptor.sheet_name, "template key validation failed");
        return Ok(ImportReport::failure(messages::TEMPLATE_NOT_VALID));
    }

    if !book.has_sheet(&descriptor.sheet_name) {
        info!(sheet = %descriptor.sheet_name, "worksheet not found");
        return Ok(ImportReport::failure(messages::WORKSHEET_NOT_FOUND));
    }

    // Unset or inconsistent ends resolve to the detected data bounds.
    let bounds = book.data_bounds(&descriptor.sheet_name)?;
    let (bound_row, bound_col) = bounds.unwrap_or((0, 0));
    let end_row = descriptor
        .end_row
        .filter(|end| *end >= descriptor.start_row)
        .unwrap_or(bound_row);
    let end_col = descriptor
        .end_column
        .filter(|end| *end >= descriptor.start_column)
        .unwrap_or(bound_col);

    let mut header_cells = Vec::new();
    for col in descriptor.start_column..=end_col {
        header_cells.push((
            col,
            book.cell_text(&descriptor.sheet_name, descriptor.header_row, col)?,
        ));
    }
    let columns = match resolve_headers(&header_cells, schema, options.duplicate_headers) {
        Ok(columns) => columns,
        Err(title) => {
            info!(header = %title, "duplicate header rejected");
            return Ok(ImportReport::failure(messages::REQUEST_NOT_VALID));
        }
    };
    debug!(
        sheet = %descriptor.sheet_name,
        mapped = columns.len(),
        end_row,
        end_col,
        "header map resolved"
    );

    let mut engine = RuleEngine::new();
    let mut tracker = UniquenessTracker::new();
    let mut records = Vec::new();

    let first_data_row = descriptor.start_row.max(descriptor.header_row + 1);
    for row in first_data_row..=end_row {
        ensure_active(cancel)?;
        let mut record = T::default();
        let mut errors = Vec::new();

        for (col, column) in &columns {
            ensure_active(cancel)?;
            let binding = &schema.fields[column.field];
            let spec = &binding.spec;
            let raw = book.cell_text(&descriptor.sheet_name, row, *col)?;
            let cell = cell_name(row, *col);

            let coerced = coerce(&raw, spec.field_type, spec.format.as_deref());
            if coerced.ok {
                binding.assign(&mut record, coerced.value.clone());
            } else if !descriptor.validate {
                // Explicit unset; the row is still included, no error.
                binding.assign(&mut record, FieldValue::Empty);
            } else {
                errors.push(FieldError::new(
                    &spec.name,
                    &descriptor.sheet_name,
                    &cell,
                    type_mismatch_message(spec.field_type),
                ));
            }

            if !descriptor.validate {
                continue;
            }

            if spec.unique
                && coerced.ok
                && !tracker.observe(spec.binding_name(), &coerced.value)
            {
                errors.push(FieldError::new(
                    &spec.name,
                    &descriptor.sheet_name,
                    &cell,
                    messages::duplicate_value(&raw),
                ));
            }

            let current = binding.current(&record);
            if column.required && current.is_empty() {
                errors.push(FieldError::new(
                    &spec.name,
                    &descriptor.sheet_name,
                    &cell,
                    messages::REQUIRED,
                ));
            }

            match engine.check(&spec.rules, &current) {
                Ok(failures) => {
                    for message in failures {
                        errors.push(FieldError::new(
                            &spec.name,
                            &descriptor.sheet_name,
                            &cell,
                            message,
                        ));
                    }
                }
                Err(error) => {
                    // A misbehaving rule is a field error, not an abort.
                    errors.push(FieldError::new(
                        &spec.name,
                        &descriptor.sheet_name,
                        &cell,
                        format!("Error parsing value: {error}"),
                    ));
                }
            }
        }

        let mut imported = ImportedRecord::new(row, record);
        imported.errors = errors;
        records.push(imported);
    }

    info!(
        sheet = %descriptor.sheet_name,
        rows = records.len(),
        errors = records.iter().map(|record| record.errors.len()).sum::<usize>(),
        "import pass complete"
    );
    Ok(ImportReport::completed(
        records,
        &descriptor.sheet_name,
        end_col,
    ))
}

/// Run collection-level validators and recompute the report's success flag.
pub fn run_validators<T>(report: &mut ImportReport<T>, validators: &[&dyn RecordsValidator<T>]) {
    let Some(last_column) = report.last_column else {
        return;
    };
    let sheet_name = report.sheet_name.clone();
    if let Some(records) = report.records.as_mut() {
        for validator in validators {
            validator.validate(records, &sheet_name, last_column);
        }
    }
    report.recheck();
}

fn ensure_active(cancel: &CancelToken) -> Result<(), ImportError> {
    if cancel.is_cancelled() {
        return Err(ImportError::Cancelled);
    }
    Ok(())
}
