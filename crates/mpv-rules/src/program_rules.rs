//! # Program Rule Checks
//!
//! PR-ST-3: a program rule without an action does nothing and is a
//! packaging error.
//!
//! PRV-MQ-1 / PRV-MQ-2: program rule variable names must be unique and
//! must stay inside the character set the rule-expression parser
//! accepts; the standalone tokens `and`, `or` and `not` are expression
//! keywords and cannot appear in a name.
//!
//! PR-ST-4 / PR-ST-5: a program rule action may only point at data
//! elements and tracked entity attributes that the package's program
//! actually uses.

use std::collections::{BTreeMap, BTreeSet};

use mpv_core::{ref_id, resource_name, seq_field, str_field, MetadataPackage};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Characters allowed in a program rule variable name.
static VARIABLE_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\- ]+$").expect("variable name pattern"));

/// Expression keywords that must not occur as standalone words in a
/// variable name (space-delimited at the start, middle, or end).
const FORBIDDEN_TOKENS: [&str; 3] = ["and", "or", "not"];

/// PR-ST-3. Every program rule must trigger at least one action.
pub fn rule_has_action(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    for rule in package.collection("programRules") {
        if seq_field(rule, "programRuleActions").is_empty() {
            let name = str_field(rule, "name");
            let uid = str_field(rule, "id");
            messages.push(format!(
                "Program Rule '{name}' ({uid}) without Program Rule Action"
            ));
        }
    }
    messages
}

/// PRV-MQ-1. Variable names must be unique across the package. One
/// message listing every duplicated name.
pub fn variable_names_unique(package: &mut MetadataPackage) -> Vec<String> {
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for variable in package.collection("programRuleVariables") {
        if let Some(name) = variable.get("name").and_then(Value::as_str) {
            *occurrences.entry(name).or_default() += 1;
        }
    }

    let duplicates: Vec<&str> = occurrences
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name)
        .collect();

    if duplicates.is_empty() {
        Vec::new()
    } else {
        vec![format!(
            "More than one PRV with the same name: {duplicates:?}"
        )]
    }
}

/// PRV-MQ-2. A variable name must not contain a standalone `and`, `or`
/// or `not`, and must match the allowed character set. The two defects
/// are independent and produce distinct messages.
pub fn variable_name_format(package: &mut MetadataPackage) -> Vec<String> {
    let mut messages = Vec::new();
    for variable in package.collection("programRuleVariables") {
        let Some(name) = variable.get("name").and_then(Value::as_str) else {
            continue;
        };
        let uid = str_field(variable, "id");

        if contains_forbidden_token(name) {
            messages.push(format!("The PRV '{name}' ({uid}) contains 'and/or/not'"));
        }
        if !VARIABLE_NAME_PATTERN.is_match(name) {
            messages.push(format!(
                "The PRV '{name}' ({uid}) contains unexpected characters"
            ));
        }
    }
    messages
}

fn contains_forbidden_token(name: &str) -> bool {
    FORBIDDEN_TOKENS.iter().any(|token| {
        name.contains(&format!(" {token} "))
            || name.starts_with(&format!("{token} "))
            || name.ends_with(&format!(" {token}"))
    })
}

/// PR-ST-4. A program rule action referencing a data element must point
/// at a data element attached to some program stage in the package.
pub fn action_data_element_in_program(package: &mut MetadataPackage) -> Vec<String> {
    let mut attached: BTreeSet<&str> = BTreeSet::new();
    for stage in package.collection("programStages") {
        for stage_element in seq_field(stage, "programStageDataElements") {
            if let Some(id) = ref_id(stage_element, "dataElement") {
                attached.insert(id);
            }
        }
    }

    let mut messages = Vec::new();
    for action in package.collection("programRuleActions") {
        let Some(element_uid) = ref_id(action, "dataElement") else {
            continue;
        };
        if attached.contains(element_uid) {
            continue;
        }
        let rule_uid = ref_id(action, "programRule").unwrap_or("");
        let rule_name = resource_name(package, "programRules", rule_uid);
        let element_name = resource_name(package, "dataElements", element_uid);
        messages.push(format!(
            "Program Rule '{rule_name}' ({rule_uid}) in the PR Action uses a DE \
             '{element_name}' ({element_uid}) that does not belong to the associated program."
        ));
    }
    messages
}

/// PR-ST-5. A program rule action referencing a tracked entity
/// attribute must point at an attribute reachable from the package's
/// first program, either directly through its
/// `programTrackedEntityAttributes` or through its tracked entity
/// type's `trackedEntityTypeAttributes`. Skipped entirely when the
/// package carries no programs.
pub fn action_attribute_in_program(package: &mut MetadataPackage) -> Vec<String> {
    let Some(program) = package.collection("programs").first() else {
        return Vec::new();
    };

    let mut reachable: BTreeSet<&str> = BTreeSet::new();
    for program_attribute in seq_field(program, "programTrackedEntityAttributes") {
        if let Some(id) = ref_id(program_attribute, "trackedEntityAttribute") {
            reachable.insert(id);
        }
    }
    if let Some(entity_type_uid) = ref_id(program, "trackedEntityType") {
        for entity_type in package.collection("trackedEntityTypes") {
            if entity_type.get("id").and_then(Value::as_str) != Some(entity_type_uid) {
                continue;
            }
            for type_attribute in seq_field(entity_type, "trackedEntityTypeAttributes") {
                if let Some(id) = ref_id(type_attribute, "trackedEntityAttribute") {
                    reachable.insert(id);
                }
            }
        }
    }

    let mut messages = Vec::new();
    for action in package.collection("programRuleActions") {
        let Some(attribute_uid) = ref_id(action, "trackedEntityAttribute") else {
            continue;
        };
        if reachable.contains(attribute_uid) {
            continue;
        }
        let rule_uid = ref_id(action, "programRule").unwrap_or("");
        let rule_name = resource_name(package, "programRules", rule_uid);
        let attribute_name = resource_name(package, "trackedEntityAttributes", attribute_uid);
        messages.push(format!(
            "Program Rule '{rule_name}' ({rule_uid}) in the PR Action uses a TEA \
             '{attribute_name}' ({attribute_uid}) that does not belong to the associated program."
        ));
    }
    messages
}
