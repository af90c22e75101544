//! # Resource Code Checks
//!
//! Codes are short, machine-stable identifiers distinct from display
//! names; they must be upper-case and drawn from a narrow symbol set.
//! Three table entries share the scope of the code-bearing resource
//! types:
//!
//! - ALL-MQ-17 (warning): the `code` field should be present.
//! - ALL-MQ-18 repair: a tab character inside a code is reported and
//!   stripped in place — the one mutation of the whole run.
//! - ALL-MQ-18 format: the (possibly repaired) code must match the
//!   per-type pattern.

use mpv_core::{str_field, MetadataPackage};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Resource types whose entries carry a `code`.
pub const RESOURCES_WITH_CODE: [&str; 9] = [
    "dashboards",
    "dataSets",
    "programs",
    "indicatorGroups",
    "dataElementGroups",
    "predictorGroups",
    "validationRuleGroups",
    "userGroups",
    "options",
];

/// Option codes additionally allow `|`, `-` and `.`.
static OPTION_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Z_|.\-]+$").expect("option code pattern"));

/// Codes of every other code-bearing type: upper-case alphanumerics
/// and underscore only.
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Z_]+$").expect("code pattern"));

/// ALL-MQ-17. Advisory: every code-bearing resource should declare a
/// `code`.
pub fn code_present(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    for resource_type in RESOURCES_WITH_CODE {
        for resource in package.collection(resource_type) {
            if resource.get("code").is_none() {
                let name = str_field(resource, "name");
                let uid = str_field(resource, "id");
                messages.push(format!(
                    "Missed code field in {resource_type} (name='{name}' uid={uid})"
                ));
            }
        }
    }
    messages
}

/// ALL-MQ-18 repair. Report every code containing a tab character
/// (the message shows the value before repair), then strip the tabs in
/// place so the format check sees the corrected value. Running the
/// catalog again on the repaired package reports nothing here.
pub fn code_tab_repair(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    for resource_type in RESOURCES_WITH_CODE {
        let Some(resources) = package.collection_mut(resource_type) else {
            continue;
        };
        for resource in resources.iter_mut() {
            let Some(code) = resource.get("code").and_then(Value::as_str) else {
                continue;
            };
            if !code.contains('\t') {
                continue;
            }
            let code = code.to_string();
            messages.push(format!(
                "Tab character in code='{code}' (resource type='{resource_type}' \
                 name='{name}' uid={uid})",
                name = str_field(resource, "name"),
                uid = str_field(resource, "id"),
            ));
            resource["code"] = Value::String(code.replace('\t', ""));
        }
    }
    messages
}

/// ALL-MQ-18 format. Codes must match the per-type pattern; evaluated
/// after the tab repair.
pub fn code_format(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    for resource_type in RESOURCES_WITH_CODE {
        let pattern: &Regex = if resource_type == "options" {
            &OPTION_CODE_PATTERN
        } else {
            &CODE_PATTERN
        };
        for resource in package.collection(resource_type) {
            let Some(code) = resource.get("code").and_then(Value::as_str) else {
                continue;
            };
            if !pattern.is_match(code) {
                let name = str_field(resource, "name");
                let uid = str_field(resource, "id");
                messages.push(format!(
                    "Invalid code='{code}' (resource type='{resource_type}' \
                     name='{name}' uid={uid})"
                ));
            }
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpv_core::normalize;
    use serde_json::json;

    fn data_set_package(code: Value) -> MetadataPackage {
        let mut resource = json!({"id": "ds1", "name": "Data Set"});
        if !code.is_null() {
            resource["code"] = code;
        }
        normalize(json!({"dataSets": [resource]})).unwrap()
    }

    #[test]
    fn missing_code_is_a_single_advisory() {
        let mut package = data_set_package(Value::Null);
        let messages = code_present(&mut package);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("dataSets"));
        assert!(messages[0].contains("name='Data Set'"));
    }

    #[test]
    fn present_code_is_not_an_advisory() {
        let mut package = data_set_package(json!("VALID_CODE"));
        assert!(code_present(&mut package).is_empty());
    }

    #[test]
    fn tab_is_reported_with_original_value_then_stripped() {
        let mut package = data_set_package(json!("AB\tC"));
        let messages = code_tab_repair(&mut package);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("code='AB\tC'"));
        assert_eq!(
            package.collection("dataSets")[0]["code"],
            json!("ABC"),
            "tab must be stripped in place"
        );
        // The repaired value satisfies the format check.
        assert!(code_format(&mut package).is_empty());
    }

    #[test]
    fn repair_is_idempotent() {
        let mut package = data_set_package(json!("AB\tC"));
        assert_eq!(code_tab_repair(&mut package).len(), 1);
        assert!(code_tab_repair(&mut package).is_empty());
    }

    #[test]
    fn lower_case_code_fails_for_data_sets() {
        let mut package = data_set_package(json!("ab-1"));
        let messages = code_format(&mut package);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("code='ab-1'"));
    }

    #[test]
    fn hyphenated_code_passes_for_options_only() {
        let mut package = normalize(json!({
            "options": [{"id": "o1", "name": "Opt", "code": "AB-1"}],
            "dataSets": [{"id": "ds1", "name": "DS", "code": "AB-1"}]
        }))
        .unwrap();
        let messages = code_format(&mut package);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("resource type='dataSets'"));
    }

    #[test]
    fn option_code_with_pipe_and_dot_passes() {
        let mut package = normalize(json!({
            "options": [{"id": "o1", "code": "A.B|C_1-2"}]
        }))
        .unwrap();
        assert!(code_format(&mut package).is_empty());
    }

    #[test]
    fn lower_case_option_code_still_fails() {
        let mut package = normalize(json!({
            "options": [{"id": "o1", "code": "ab-1"}]
        }))
        .unwrap();
        assert_eq!(code_format(&mut package).len(), 1);
    }

    #[test]
    fn empty_code_fails_the_pattern() {
        let mut package = data_set_package(json!(""));
        assert_eq!(code_format(&mut package).len(), 1);
    }
}
