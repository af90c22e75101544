//! # Recursive Visitor
//!
//! Schema-agnostic traversal of an arbitrary nested JSON value. The
//! callback is invoked once for every key/value pair found at any
//! mapping level, recursing into nested objects and into the elements
//! of nested arrays.
//!
//! Traversal order is the insertion order of each object and the index
//! order of each array; no guarantee beyond that. The structure itself
//! is never modified — callbacks observe, they do not edit.
//!
//! This path exists for package-wide audits that must see the whole
//! document irrespective of shape. It is deliberately kept apart from
//! the typed collection accessors in [`document`](crate::document),
//! which depend on exact field names.

use serde_json::Value;

/// Invoke `callback(key, value)` for every key/value pair in `value`,
/// at any depth.
pub fn walk<F>(value: &Value, callback: &mut F)
where
    F: FnMut(&str, &Value),
{
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                callback(key, child);
                walk(child, callback);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, callback);
            }
        }
        _ => {}
    }
}
