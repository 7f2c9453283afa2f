//! Template-row denormalization.
//!
//! Spreadsheet and document template engines bind one flat row per output
//! line. A logical record whose fields include arrays of sub-objects (line
//! items, say) must become N index-aligned flat rows before the engine sees
//! it. The algorithm, per record:
//!
//! 1. `max_items` = longest array-valued field (0 when none).
//! 2. With no arrays the record passes through as a single row.
//! 3. Shorter non-empty arrays are padded with blank-leaf clones of their
//!    first element; empty arrays are left alone.
//! 4. Row *i* carries every scalar field verbatim and, per array field, the
//!    element at index *i* with the array wrapper dropped (`null` when the
//!    array has no element there).
//!
//! Everything here is pure and operates on copies; callers' records are
//! never mutated. Intentionally one level deep: array-of-array is not a
//! target shape.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Flatten each record of a list; results concatenate in input order.
pub fn denormalize(records: &[Value]) -> Vec<Value> {
    records.iter().flat_map(flatten_record).collect()
}

/// Flatten one record into its index-aligned rows.
pub fn flatten_record(record: &Value) -> Vec<Value> {
    let Some(object) = record.as_object() else {
        return vec![record.clone()];
    };
    let count = max_items(object);
    if count == 0 {
        return vec![record.clone()];
    }
    let mut padded = object.clone();
    pad_arrays(&mut padded, count);
    (0..count).map(|index| row_at(&padded, index)).collect()
}

/// Denormalize every array-valued entry of a merge-key payload; non-array
/// values pass through untouched.
pub fn denormalize_payload(data: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    data.iter()
        .map(|(key, value)| {
            let flattened = match value.as_array() {
                Some(records) => Value::Array(denormalize(records)),
                None => value.clone(),
            };
            (key.clone(), flattened)
        })
        .collect()
}

/// Longest array-valued field of the record, 0 when it has none.
fn max_items(object: &Map<String, Value>) -> usize {
    object
        .values()
        .filter_map(Value::as_array)
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

/// Pad every shorter non-empty array up to `count` elements with blank-leaf
/// clones of its first element. Arrays already at `count`, and empty
/// arrays, are left as-is.
fn pad_arrays(object: &mut Map<String, Value>, count: usize) {
    for value in object.values_mut() {
        let Some(items) = value.as_array_mut() else {
            continue;
        };
        let current = items.len();
        if current == 0 || current >= count {
            continue;
        }
        let filler = blank_clone(&items[0]);
        items.resize(count, filler);
    }
}

/// Clone of an element with every leaf blanked out: same keys, empty
/// string values. Non-object elements blank to an empty string.
fn blank_clone(first: &Value) -> Value {
    match first.as_object() {
        Some(object) => {
            let blanked: Map<String, Value> = object
                .keys()
                .map(|key| (key.clone(), Value::String(String::new())))
                .collect();
            Value::Object(blanked)
        }
        None => Value::String(String::new()),
    }
}

/// One flat row: scalars verbatim, array fields reduced to their element at
/// `index` (or `null` past the end, which only empty arrays reach after
/// padding).
fn row_at(object: &Map<String, Value>, index: usize) -> Value {
    let row: Map<String, Value> = object
        .iter()
        .map(|(key, value)| {
            let cell = match value.as_array() {
                Some(items) => items.get(index).cloned().unwrap_or(Value::Null),
                None => value.clone(),
            };
            (key.clone(), cell)
        })
        .collect();
    Value::Object(row)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn max_items_ignores_scalars() {
        let record = json!({"id": 1, "items": [1, 2, 3], "tags": []});
        assert_eq!(max_items(record.as_object().unwrap()), 3);
        let scalar_only = json!({"id": 1});
        assert_eq!(max_items(scalar_only.as_object().unwrap()), 0);
    }

    #[test]
    fn blank_clone_keeps_keys_and_blanks_leaves() {
        let element = json!({"sku": "A", "qty": 2});
        assert_eq!(blank_clone(&element), json!({"sku": "", "qty": ""}));
        assert_eq!(blank_clone(&json!(5)), json!(""));
    }
}
