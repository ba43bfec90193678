//! Conversion of parsed JSON data into flat record sets

use serde_json::{Value, json};

/// Normalize arbitrary JSON into a record set.
///
/// Arrays are already record sets. Objects become one `{key, value}` record
/// per property in object order, `null` becomes an empty set and any other
/// scalar a single-element set.
pub fn normalize_records(data: Value) -> Vec<Value> {
    match data {
        Value::Array(records) => records,
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| json!({ "key": key, "value": value }))
            .collect(),
        Value::Null => Vec::new(),
        scalar => vec![scalar],
    }
}

/// Check whether a record set has the `{key, value}` shape of properties data.
///
/// Only the first record is inspected.
pub fn is_properties_collection(records: &[Value]) -> bool {
    records
        .first()
        .and_then(Value::as_object)
        .is_some_and(|first| first.contains_key("key") && first.contains_key("value"))
}
