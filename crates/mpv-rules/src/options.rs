//! # Option Rules
//!
//! O-MQ-2: the options of each option set must carry a contiguous
//! 1..N `sortOrder` permutation.
//!
//! OG-MQ-1: option groups may only reference options that some option
//! set declares as a member — the option-set membership list is the
//! authoritative one.

use mpv_core::{extract_nested_ids, ref_id, resource_name, MetadataPackage};
use serde_json::Value;

/// O-MQ-2. Group options by their option set and check that the sorted
/// `sortOrder` values form exactly `1..=N`. Duplicates and gaps are
/// violations, as are sequences that start past 1 or stop short of N.
///
/// Options without an `optionSet` reference or a numeric `sortOrder`
/// are skipped per the shape policy.
pub fn option_sort_order(package: &mut MetadataPackage) -> Vec<String> {
    // Grouping preserves first-seen order so messages are deterministic.
    let mut by_option_set: Vec<(String, Vec<i64>)> = Vec::new();
    for option in package.collection("options") {
        let Some(option_set) = ref_id(option, "optionSet") else {
            continue;
        };
        let Some(sort_order) = option.get("sortOrder").and_then(Value::as_i64) else {
            continue;
        };
        match by_option_set
            .iter_mut()
            .find(|(uid, _)| uid == option_set)
        {
            Some((_, orders)) => orders.push(sort_order),
            None => by_option_set.push((option_set.to_string(), vec![sort_order])),
        }
    }

    let mut messages = Vec::new();
    for (uid, mut orders) in by_option_set {
        orders.sort_unstable();
        let contiguous = orders
            .iter()
            .enumerate()
            .all(|(position, &order)| order == position as i64 + 1);
        if !contiguous {
            let name = resource_name(package, "optionSets", &uid);
            let listed = orders
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            messages.push(format!(
                "The optionSet '{name}' ({uid}) has errors in the sortOrder. \
                 Current sortOrder: {listed}"
            ));
        }
    }
    messages
}

/// OG-MQ-1. Every option referenced from any option group must also be
/// referenced from some option set.
pub fn option_group_membership(package: &mut MetadataPackage) -> Vec<String> {
    let in_groups = extract_nested_ids(package.collection("optionGroups"), "options");
    let in_sets = extract_nested_ids(package.collection("optionSets"), "options");

    in_groups
        .difference(&in_sets)
        .map(|uid| {
            let name = resource_name(package, "options", uid);
            format!("Option in OptionGroup but not in OptionSet. Option '{name}' ({uid})")
        })
        .collect()
}
