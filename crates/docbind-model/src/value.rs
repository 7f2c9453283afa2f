use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT};

/// Semantic type of a record field, used to pick the coercion for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Single-precision float.
    Float,
    /// Decimal quantity (carried as f64).
    Decimal,
    /// Calendar date without time of day.
    Date,
    /// Date with time of day.
    DateTime,
    /// Free text; coercion never fails.
    Text,
    /// Sequence-valued field. Cells coerce as text; how the record splits
    /// the text into elements is up to its `set` accessor.
    List,
}

/// A coerced cell value.
///
/// `Empty` is the explicit unset/null sentinel assigned when coercion fails
/// with validation disabled; it is distinct from `Text(String::new())`,
/// which is a successfully coerced empty cell on a text field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Int(i32),
    Long(i64),
    Float(f32),
    Decimal(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// True for the unset sentinel and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            FieldValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Text form consumed by pattern/length rules and the uniqueness
    /// tracker; `None` only for the unset sentinel.
    pub fn text_repr(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Long(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Decimal(value) => write!(f, "{value}"),
            FieldValue::Date(value) => write!(f, "{}", value.format(DEFAULT_DATE_FORMAT)),
            FieldValue::DateTime(value) => {
                write!(f, "{}", value.format(DEFAULT_DATETIME_FORMAT))
            }
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::List(items) => f.write_str(&items.join(";")),
        }
    }
}
