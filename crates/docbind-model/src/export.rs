//! Request/response models for the remote document-rendering service and
//! the error-writeback entrypoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// How grouped columns are merged in a rendered sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    /// Merge each grouped column across the whole data region.
    All,
    /// Merge per run of rows delimited by non-empty anchor values.
    ValueRuns,
}

/// Columns to merge after the template engine has rendered its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    pub range_name: String,
    pub columns: Vec<u32>,
    pub mode: GroupMode,
}

/// Single-document export request. `data` maps merge keys to JSON value
/// trees; array-valued trees are denormalized into flat rows before the
/// template engine binds them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    pub file_type: String,
    pub file_extension: String,
    pub file_name: String,
    /// Template location on the storage service.
    pub template_uri: String,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub column_groups: Vec<ColumnGroup>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportBatchItem {
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

/// Multi-document export request: one output per item, same template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportBatchRequest {
    pub file_type: String,
    pub file_extension: String,
    pub file_name: String,
    pub template_uri: String,
    #[serde(default)]
    pub items: Vec<ExportBatchItem>,
}

/// Rendered document returned by an export call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub success: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_extension: String,
    #[serde(default)]
    pub data: Option<Vec<u8>>,
}
