use serde::{Deserialize, Serialize};

/// A coercion or validation failure scoped to one (sheet, cell, field).
///
/// Field errors never abort an import pass; they accumulate on the owning
/// record and double as the input model for error writeback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub sheet: String,
    pub cell: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        sheet: impl Into<String>,
        cell: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            sheet: sheet.into(),
            cell: cell.into(),
            message: message.into(),
        }
    }
}
