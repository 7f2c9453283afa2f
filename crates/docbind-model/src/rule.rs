use serde::{Deserialize, Serialize};

/// A validation rule attached to a field descriptor.
///
/// Rules are plain data: the rule engine owns evaluation (and pattern
/// compilation), so schemas can be declared in code or loaded from JSON.
/// Every applicable rule runs for a cell; failures accumulate rather than
/// short-circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present and, for text, non-empty.
    Required,
    /// Value's text form must match the pattern.
    Match { pattern: String },
    /// Email shape; falls back to the built-in pattern when none given.
    Email {
        #[serde(default)]
        pattern: Option<String>,
    },
    /// Phone-number shape; falls back to the built-in pattern.
    Phone {
        #[serde(default)]
        pattern: Option<String>,
    },
    /// Value's text form must parse as a 32-bit integer.
    Integer,
    /// Value's text form must parse as a 64-bit integer.
    Long,
    /// Value's text form must parse as a float.
    Float,
    /// Value parses as a float with at most `digits` fractional digits.
    FloatPrecision { digits: u32 },
    /// Minimum character count of the text form.
    MinLength { min: usize },
    /// Maximum character count of the text form.
    MaxLength { max: usize },
    /// Sequence-valued fields must not repeat an element within one record.
    /// Distinct from the sheet-wide uniqueness flag on the field itself.
    UniqueValues,
}
