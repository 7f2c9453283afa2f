//! Error message constants.
//!
//! Field-level messages end up verbatim in error reports and workbook notes,
//! so existing consumers depend on the exact wording. Structural codes are
//! machine-readable and compared by callers.

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format.";
pub const INVALID_DATETIME_FORMAT: &str = "Invalid date time format.";
pub const INVALID_FLOAT_PRECISION: &str = "Invalid float precision.";
pub const INVALID_DECIMAL: &str = "Invalid decimal format.";
pub const INVALID_FORMAT: &str = "Invalid format.";
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format.";
pub const INVALID_PHONE_FORMAT: &str = "Invalid phone number format.";
pub const INVALID_NUMERIC_VALUE: &str = "Value must be numeric.";
pub const UNIQUE: &str = "Value must be unique.";
pub const INVALID_TYPE_INTEGER: &str = "Value must be integer.";
pub const INVALID_TYPE_LONG: &str = "Value must be long.";
pub const INVALID_TYPE_FLOAT: &str = "Value must be float.";
pub const INVALID_TYPE_DECIMAL: &str = "Value must be decimal.";
pub const INVALID_TYPE_DATETIME: &str = "Value must be date time.";
pub const INVALID_TYPE_DATE: &str = "Value must be date.";
pub const INVALID_TYPE_STRING: &str = "Value must be string.";

/// Structural failure codes. These short-circuit an import before any row
/// is read and are never mixed with per-field errors.
pub const TEMPLATE_NOT_VALID: &str = "TEMPLATE_NOT_VALID";
pub const REQUEST_NOT_VALID: &str = "REQUEST_NOT_VALID";
pub const WORKSHEET_NOT_FOUND: &str = "WORKSHEET_NOT_FOUND";

pub fn min_length(min: usize) -> String {
    format!("Value must be at least {min} characters long.")
}

pub fn max_length(max: usize) -> String {
    format!("Value must be at most {max} characters long.")
}

pub fn duplicate_value(raw: &str) -> String {
    format!("Duplicate value found: {raw}")
}
