//! # Reference Index Builder
//!
//! Builds the identifier set behind a nested reference field, across a
//! whole collection of entities and across arbitrary nesting depth.
//! The result feeds membership and subset checks — for example, "every
//! option referenced by an option group must also be referenced by an
//! option set".

use std::collections::BTreeSet;

use serde_json::Value;

/// Collect the `id`s of every occurrence of `field_name` nested
/// anywhere inside the given entities.
///
/// A matched field may hold a single reference object (`{"id": ...}`)
/// or a sequence of reference objects; both contribute their `id`s.
/// Entries without a string `id` are ignored.
pub fn extract_nested_ids(entities: &[Value], field_name: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for entity in entities {
        collect(entity, field_name, &mut ids);
    }
    ids
}

fn collect(value: &Value, field_name: &str, ids: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == field_name {
                    push_reference_ids(child, ids);
                }
                collect(child, field_name, ids);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, field_name, ids);
            }
        }
        _ => {}
    }
}

fn push_reference_ids(value: &Value, ids: &mut BTreeSet<String>) {
    match value {
        Value::Object(_) => {
            if let Some(id) = value.get("id").and_then(Value::as_str) {
                ids.insert(id.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Some(id) = item.get("id").and_then(Value::as_str) {
                    ids.insert(id.to_string());
                }
            }
        }
        _ => {}
    }
}
