//! # Metadata Package Document Model
//!
//! A metadata package is a single JSON object whose top-level keys map
//! resource-type names (`"options"`, `"programRules"`, ...) to arrays of
//! resource objects. The document carries no intrinsic referential
//! guarantees; every invariant is checked by the rule catalog after the
//! fact.
//!
//! `normalize()` is the only constructor. It is a pure function: the
//! caller hands over a raw `serde_json::Value` and receives a new
//! package in which every guaranteed collection is present, rather than
//! having its own document mutated in place.
//!
//! ## Shape Policy
//!
//! Absence is tolerated everywhere below the top level. Accessors return
//! empty slices, empty strings, or `None` for missing fields, so rule
//! code never panics on a sparse document. The only fatal shapes are a
//! non-object root and a recognized collection key bound to a non-array
//! value.

use serde_json::Value;

use crate::error::DocumentError;

/// Collections that [`normalize`] guarantees to exist (empty when the
/// source document omits them).
pub const NORMALIZED_COLLECTIONS: [&str; 7] = [
    "options",
    "optionGroups",
    "optionSets",
    "programRules",
    "programRuleVariables",
    "programRuleActions",
    "programStages",
];

/// All top-level keys the typed rules read as resource collections.
/// Keys outside this list are ignored by the typed rules but still
/// visited by the whole-document audits.
pub const RECOGNIZED_COLLECTIONS: [&str; 9] = [
    "options",
    "optionGroups",
    "optionSets",
    "programRules",
    "programRuleActions",
    "programRuleVariables",
    "programStages",
    "programs",
    "trackedEntityTypes",
];

/// A normalized, in-memory metadata package.
///
/// Owned exclusively by one validation run. Read-mostly: the single
/// mutation after construction is the tab-stripping code repair, which
/// goes through [`collection_mut`](MetadataPackage::collection_mut).
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataPackage {
    root: Value,
}

impl MetadataPackage {
    /// The whole document, for schema-agnostic traversal.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// The resources of a collection, or an empty slice when the key is
    /// absent or not an array.
    pub fn collection(&self, name: &str) -> &[Value] {
        self.root
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mutable access to a collection, for the in-place code repair.
    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        self.root.get_mut(name).and_then(Value::as_array_mut)
    }
}

/// Build a [`MetadataPackage`] from a raw parsed document.
///
/// Returns a new value in which every collection named in
/// [`NORMALIZED_COLLECTIONS`] is present (materialized as an empty array
/// when absent). The caller's document is consumed, never aliased.
///
/// # Errors
///
/// - [`DocumentError::NotAnObject`] when the root is not a JSON object.
/// - [`DocumentError::InvalidCollection`] when a key named in
///   [`RECOGNIZED_COLLECTIONS`] is present but not an array.
pub fn normalize(raw: Value) -> Result<MetadataPackage, DocumentError> {
    let Value::Object(mut map) = raw else {
        return Err(DocumentError::NotAnObject);
    };

    for name in RECOGNIZED_COLLECTIONS {
        if let Some(value) = map.get(name) {
            if !value.is_array() {
                return Err(DocumentError::InvalidCollection {
                    name: name.to_string(),
                });
            }
        }
    }

    for name in NORMALIZED_COLLECTIONS {
        map.entry(name).or_insert_with(|| Value::Array(Vec::new()));
    }

    Ok(MetadataPackage {
        root: Value::Object(map),
    })
}

/// A string field of a resource, or `""` when absent or not a string.
pub fn str_field<'a>(resource: &'a Value, field: &str) -> &'a str {
    resource.get(field).and_then(Value::as_str).unwrap_or("")
}

/// A sequence field of a resource, or an empty slice.
pub fn seq_field<'a>(resource: &'a Value, field: &str) -> &'a [Value] {
    resource
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The `id` of a reference object nested under `field`, when present.
///
/// References have the shape `{"optionSet": {"id": "..."}}`; this reads
/// `resource[field]["id"]` tolerantly.
pub fn ref_id<'a>(resource: &'a Value, field: &str) -> Option<&'a str> {
    resource
        .get(field)
        .and_then(|reference| reference.get("id"))
        .and_then(Value::as_str)
}
