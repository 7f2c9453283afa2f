//! Header row resolution: match header text to field bindings and detect
//! required-column markers.

use std::collections::BTreeMap;

use docbind_model::RecordSchema;

use crate::pipeline::DuplicateHeaderPolicy;

/// A header-row column resolved to a field binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn {
    /// Index into the schema's field table.
    pub field: usize,
    /// The header carried a required marker.
    pub required: bool,
    /// Header text after marker stripping.
    pub title: String,
}

/// Strip required markers (`(*)`, `*`, `()`) from a header and report
/// whether one was present. Stripping is idempotent: `"Name(*)"` and
/// `"Name *"` both resolve to `"Name"`.
pub fn strip_required_marker(text: &str) -> (String, bool) {
    if !text.contains('*') {
        return (text.trim().to_string(), false);
    }
    let cleaned = text.replace("(*)", "").replace('*', "").replace("()", "");
    (cleaned.trim().to_string(), true)
}

/// Build the column -> field map from the header row's cells.
///
/// Columns whose cleaned text matches no binding identity are skipped
/// silently. Two columns may resolve to the same field: under `LastWins`
/// both stay mapped and the later column's value ends up in the record;
/// under `Reject` the duplicated title is returned as an error.
pub fn resolve_headers<T>(
    header_cells: &[(u32, String)],
    schema: &RecordSchema<T>,
    policy: DuplicateHeaderPolicy,
) -> Result<BTreeMap<u32, HeaderColumn>, String> {
    let mut columns = BTreeMap::new();
    let mut occupied: Vec<Option<u32>> = vec![None; schema.fields.len()];

    for (col, text) in header_cells {
        let (title, required) = strip_required_marker(text);
        if title.is_empty() {
            continue;
        }
        let Some(field) = schema.binding_for(&title) else {
            continue;
        };
        if occupied[field].is_some() && policy == DuplicateHeaderPolicy::Reject {
            return Err(title);
        }
        occupied[field] = Some(*col);
        columns.insert(
            *col,
            HeaderColumn {
                field,
                required,
                title,
            },
        );
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use docbind_model::{FieldSchema, FieldType, SheetDescriptor};

    use super::*;

    #[derive(Debug, Default)]
    struct Row {
        name: Option<String>,
        qty: Option<i32>,
    }

    fn schema() -> RecordSchema<Row> {
        RecordSchema::new(SheetDescriptor::default())
            .field(
                FieldSchema::new("Name", FieldType::Text),
                |row, value| row.name = value.text_repr(),
                |row| {
                    row.name
                        .clone()
                        .map_or(docbind_model::FieldValue::Empty, docbind_model::FieldValue::Text)
                },
            )
            .field(
                FieldSchema::new("Qty", FieldType::Int),
                |row, value| row.qty = value.as_int(),
                |row| {
                    row.qty
                        .map_or(docbind_model::FieldValue::Empty, docbind_model::FieldValue::Int)
                },
            )
    }

    fn cells(texts: &[&str]) -> Vec<(u32, String)> {
        texts
            .iter()
            .enumerate()
            .map(|(col, text)| (col as u32, (*text).to_string()))
            .collect()
    }

    #[test]
    fn marker_variants_strip_to_the_same_title() {
        assert_eq!(strip_required_marker("Name(*)"), ("Name".to_string(), true));
        assert_eq!(strip_required_marker("Name *"), ("Name".to_string(), true));
        assert_eq!(strip_required_marker("Name"), ("Name".to_string(), false));
        assert_eq!(strip_required_marker(" Name "), ("Name".to_string(), false));
    }

    #[test]
    fn unmatched_columns_are_skipped_silently() {
        let schema = schema();
        let columns = resolve_headers(
            &cells(&["Name", "Comment", "Qty"]),
            &schema,
            DuplicateHeaderPolicy::LastWins,
        )
        .unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[&0].field, 0);
        assert_eq!(columns[&2].field, 1);
        assert!(!columns.contains_key(&1));
    }

    #[test]
    fn required_markers_set_the_column_flag() {
        let schema = schema();
        let columns = resolve_headers(
            &cells(&["Name(*)", "Qty"]),
            &schema,
            DuplicateHeaderPolicy::LastWins,
        )
        .unwrap();
        assert!(columns[&0].required);
        assert!(!columns[&1].required);
    }

    #[test]
    fn duplicate_headers_follow_the_policy() {
        let schema = schema();
        let duplicated = cells(&["Name", "Name", "Qty"]);
        let columns =
            resolve_headers(&duplicated, &schema, DuplicateHeaderPolicy::LastWins).unwrap();
        // Both columns stay mapped; the later one overwrites during the pass.
        assert_eq!(columns[&0].field, 0);
        assert_eq!(columns[&1].field, 0);

        let rejected = resolve_headers(&duplicated, &schema, DuplicateHeaderPolicy::Reject);
        assert_eq!(rejected, Err("Name".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let schema = schema();
        let columns = resolve_headers(
            &cells(&["NAME", "qty"]),
            &schema,
            DuplicateHeaderPolicy::LastWins,
        )
        .unwrap();
        assert_eq!(columns.len(), 2);
    }
}
