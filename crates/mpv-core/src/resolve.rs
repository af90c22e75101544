//! # Name Resolver
//!
//! Identifier-to-name lookup for diagnostic messages. Presentation
//! only: a failed lookup yields a fallback string and is never part of
//! a rule's pass/fail decision.

use serde_json::Value;

use crate::document::MetadataPackage;

/// Fallback returned when the identifier cannot be resolved.
pub const UNKNOWN_NAME: &str = "unknown";

/// The human-readable name of the resource with the given `id` in
/// `package[resource_type]`, or [`UNKNOWN_NAME`].
///
/// Linear scan; never fails, even for collections that do not exist.
pub fn resource_name(package: &MetadataPackage, resource_type: &str, id: &str) -> String {
    package
        .collection(resource_type)
        .iter()
        .find(|resource| resource.get("id").and_then(Value::as_str) == Some(id))
        .and_then(|resource| resource.get("name").and_then(Value::as_str))
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::normalize;
    use serde_json::json;

    #[test]
    fn resolves_name_by_id() {
        let package = normalize(json!({
            "optionSets": [
                {"id": "os1", "name": "Yes/No"},
                {"id": "os2", "name": "Colours"}
            ]
        }))
        .unwrap();
        assert_eq!(resource_name(&package, "optionSets", "os2"), "Colours");
    }

    #[test]
    fn unknown_id_falls_back() {
        let package = normalize(json!({"optionSets": []})).unwrap();
        assert_eq!(resource_name(&package, "optionSets", "nope"), UNKNOWN_NAME);
    }

    #[test]
    fn missing_collection_falls_back() {
        let package = normalize(json!({})).unwrap();
        assert_eq!(resource_name(&package, "dataElements", "de1"), UNKNOWN_NAME);
    }

    #[test]
    fn resource_without_name_falls_back() {
        let package = normalize(json!({"options": [{"id": "o1"}]})).unwrap();
        assert_eq!(resource_name(&package, "options", "o1"), UNKNOWN_NAME);
    }
}
