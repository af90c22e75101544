//! # Package-Wide Audits
//!
//! SHST-MQ-1 and ALL-MQ-16 are not scoped to one collection: the flags
//! they hunt for can appear on any resource at any depth, including
//! under top-level keys the typed rules never read. Both therefore go
//! through the schema-agnostic [`walk`](mpv_core::walk) traversal
//! rather than the typed accessors.

use mpv_core::{walk, MetadataPackage};
use serde_json::Value;

/// SHST-MQ-1. Flag every `"externalAccess": true` anywhere in the
/// document; exported packages must not grant external access.
pub fn external_access(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    walk(package.as_value(), &mut |key, value| {
        if key == "externalAccess" && value.as_bool() == Some(true) {
            messages.push(
                "There is a resource with external access. \
                 Suggestion: use grep command for finding '\"externalAccess\": true'"
                    .to_string(),
            );
        }
    });
    messages
}

/// ALL-MQ-16. Flag every non-empty `favorites` list anywhere in the
/// document; a package must not carry references to the users who
/// favourited a resource.
pub fn favorites(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    walk(package.as_value(), &mut |key, value| {
        if key != "favorites" {
            return;
        }
        let users = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
        if !users.is_empty() {
            let listed = users
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(",");
            messages.push(format!(
                "There is a reference to user ({listed}) that saved the resource as \
                 favourite. Suggestion: use grep command for finding"
            ));
        }
    });
    messages
}
