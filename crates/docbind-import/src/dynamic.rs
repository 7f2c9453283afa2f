//! Schema-driven record type with no compiled struct behind it.
//!
//! Useful when the record shape is only known at runtime (schema files,
//! ad-hoc imports from the CLI). Field values live in a map keyed by the
//! declared field name.

use std::collections::BTreeMap;

use docbind_model::{FieldSchema, FieldValue, RecordSchema, SheetDescriptor};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRecord {
    values: BTreeMap<String, FieldValue>,
}

impl DynamicRecord {
    pub fn get(&self, field: &str) -> FieldValue {
        self.values.get(field).cloned().unwrap_or(FieldValue::Empty)
    }

    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.values.insert(field.into(), value);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Build a `RecordSchema<DynamicRecord>` where every field stores into the
/// record's value map under its declared name.
pub fn dynamic_schema(
    sheet: SheetDescriptor,
    fields: Vec<FieldSchema>,
) -> RecordSchema<DynamicRecord> {
    fields.into_iter().fold(
        RecordSchema::new(sheet),
        |schema, spec| {
            let set_name = spec.name.clone();
            let get_name = spec.name.clone();
            schema.field(
                spec,
                move |record: &mut DynamicRecord, value| {
                    record.set(set_name.clone(), value);
                },
                move |record: &DynamicRecord| record.get(&get_name),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use docbind_model::FieldType;

    use super::*;

    #[test]
    fn dynamic_fields_round_trip_through_the_bindings() {
        let schema = dynamic_schema(
            SheetDescriptor::default(),
            vec![
                FieldSchema::new("Name", FieldType::Text),
                FieldSchema::new("Qty", FieldType::Int),
            ],
        );
        let mut record = DynamicRecord::default();
        schema.fields[0].assign(&mut record, FieldValue::Text("widget".to_string()));
        schema.fields[1].assign(&mut record, FieldValue::Int(3));

        assert_eq!(record.get("Name"), FieldValue::Text("widget".to_string()));
        assert_eq!(schema.fields[1].current(&record), FieldValue::Int(3));
        assert_eq!(record.get("Missing"), FieldValue::Empty);
    }
}
