use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHEET_NAME;
use crate::rule::Rule;
use crate::value::FieldType;

/// Where a record type's data lives inside a workbook.
///
/// All indices are zero-based. `end_row`/`end_column` left unset (or set
/// inconsistently, end < start) resolve to the sheet's detected data bounds
/// at import time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetDescriptor {
    pub sheet_name: String,
    pub header_row: u32,
    pub start_row: u32,
    pub start_column: u32,
    pub end_row: Option<u32>,
    pub end_column: Option<u32>,
    /// When false, coercion failures leave fields unset instead of raising
    /// field errors, and no rules run.
    pub validate: bool,
}

impl Default for SheetDescriptor {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_row: 0,
            start_row: 0,
            start_column: 0,
            end_row: None,
            end_column: None,
            validate: true,
        }
    }
}

impl SheetDescriptor {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn header_row(mut self, row: u32) -> Self {
        self.header_row = row;
        self
    }

    #[must_use]
    pub fn rows(mut self, start: u32, end: Option<u32>) -> Self {
        self.start_row = start;
        self.end_row = end;
        self
    }

    #[must_use]
    pub fn columns(mut self, start: u32, end: Option<u32>) -> Self {
        self.start_column = start;
        self.end_column = end;
        self
    }

    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

/// Declarative metadata for one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    /// Header text override; binding identity is the alias when present.
    #[serde(default)]
    pub alias: Option<String>,
    pub field_type: FieldType,
    /// chrono format hint for date/date-time fields, tried before the
    /// default format.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Participates in sheet-wide uniqueness tracking.
    #[serde(default)]
    pub unique: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            alias: None,
            field_type,
            format: None,
            rules: Vec::new(),
            unique: false,
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Identity used to match header text: the alias if present, else the
    /// declared name. Comparison is case-insensitive at the resolver.
    pub fn binding_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}
