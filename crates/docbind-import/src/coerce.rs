//! Cell text to typed value coercion.

use chrono::{NaiveDate, NaiveDateTime};

use docbind_model::constants::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT};
use docbind_model::{FieldType, FieldValue, messages};

/// Outcome of coercing one cell. `ok == false` leaves `value` at the unset
/// sentinel; the pipeline decides whether that becomes a field error
/// (validation on) or an explicit unset assignment (validation off).
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    pub value: FieldValue,
    pub ok: bool,
}

impl Coercion {
    fn ok(value: FieldValue) -> Self {
        Self { value, ok: true }
    }

    fn failed() -> Self {
        Self {
            value: FieldValue::Empty,
            ok: false,
        }
    }
}

/// Convert a raw cell's text into a field's target type.
///
/// Numeric parses are locale-invariant. Date and date-time fields try the
/// field's format hint first (chrono syntax) and fall back to the fixed
/// default format; text never fails and keeps the raw text verbatim,
/// including empty strings. List-typed fields coerce as text; splitting is
/// the record accessor's business.
pub fn coerce(raw: &str, field_type: FieldType, format: Option<&str>) -> Coercion {
    match field_type {
        FieldType::Int => raw
            .parse::<i32>()
            .map_or_else(|_| Coercion::failed(), |value| {
                Coercion::ok(FieldValue::Int(value))
            }),
        FieldType::Long => raw
            .parse::<i64>()
            .map_or_else(|_| Coercion::failed(), |value| {
                Coercion::ok(FieldValue::Long(value))
            }),
        FieldType::Float => raw
            .parse::<f32>()
            .map_or_else(|_| Coercion::failed(), |value| {
                Coercion::ok(FieldValue::Float(value))
            }),
        FieldType::Decimal => raw
            .parse::<f64>()
            .map_or_else(|_| Coercion::failed(), |value| {
                Coercion::ok(FieldValue::Decimal(value))
            }),
        FieldType::Date => parse_date(raw, format)
            .map_or_else(Coercion::failed, |value| {
                Coercion::ok(FieldValue::Date(value))
            }),
        FieldType::DateTime => parse_datetime(raw, format)
            .map_or_else(Coercion::failed, |value| {
                Coercion::ok(FieldValue::DateTime(value))
            }),
        FieldType::Text | FieldType::List => Coercion::ok(FieldValue::Text(raw.to_string())),
    }
}

fn parse_date(raw: &str, format: Option<&str>) -> Option<NaiveDate> {
    if let Some(hint) = format {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, hint) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, DEFAULT_DATE_FORMAT).ok()
}

fn parse_datetime(raw: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    if let Some(hint) = format {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, hint) {
            return Some(parsed);
        }
    }
    NaiveDateTime::parse_from_str(raw, DEFAULT_DATETIME_FORMAT).ok()
}

/// Message attached when coercion fails with validation enabled.
pub fn type_mismatch_message(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Int => messages::INVALID_TYPE_INTEGER,
        FieldType::Long => messages::INVALID_TYPE_LONG,
        FieldType::Float => messages::INVALID_TYPE_FLOAT,
        FieldType::Decimal => messages::INVALID_TYPE_DECIMAL,
        FieldType::Date => messages::INVALID_TYPE_DATE,
        FieldType::DateTime => messages::INVALID_TYPE_DATETIME,
        FieldType::Text | FieldType::List => messages::INVALID_TYPE_STRING,
    }
}
