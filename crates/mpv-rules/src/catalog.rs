//! # Rule Table and Driver
//!
//! The catalog is data, not control flow: every rule is a [`RuleSpec`]
//! row carrying its code, the severity of its violations, whether those
//! violations increment the error count, and the check function. One
//! driver evaluates the table in order. This makes the counted-versus-
//! logged distinction an auditable column instead of a side effect of
//! which call a rule happens to make.
//!
//! ## Counting Asymmetry
//!
//! Only O-MQ-2, PR-ST-3 and the two ALL-MQ-18 entries count toward the
//! error total. OG-MQ-1, SHST-MQ-1, ALL-MQ-16, PRV-MQ-1, PRV-MQ-2,
//! PR-ST-4 and PR-ST-5 emit error-severity diagnostics that do not
//! count, and ALL-MQ-17 is a warning. The asymmetry is deliberate; the
//! exit status of the validator depends on it.

use mpv_core::{DiagnosticSink, MetadataPackage, Severity};

use crate::{audits, codes, options, program_rules};

/// One row of the rule catalog.
pub struct RuleSpec {
    /// Stable rule code emitted with every violation.
    pub code: &'static str,
    /// Severity assigned to this rule's violations.
    pub severity: Severity,
    /// Whether violations increment the sink's error count.
    pub counted: bool,
    /// The check. Returns one message per violating instance. Takes the
    /// package mutably because the ALL-MQ-18 repair rewrites `code`
    /// fields in place; every other rule only reads.
    pub check: fn(&mut MetadataPackage) -> Vec<String>,
}

/// The fixed rule catalog, in evaluation order. The ALL-MQ-18 repair
/// entry precedes the ALL-MQ-18 format entry; see the module docs.
pub const CATALOG: &[RuleSpec] = &[
    RuleSpec {
        code: "O-MQ-2",
        severity: Severity::Error,
        counted: true,
        check: options::option_sort_order,
    },
    RuleSpec {
        code: "OG-MQ-1",
        severity: Severity::Error,
        counted: false,
        check: options::option_group_membership,
    },
    RuleSpec {
        code: "SHST-MQ-1",
        severity: Severity::Error,
        counted: false,
        check: audits::external_access,
    },
    RuleSpec {
        code: "ALL-MQ-16",
        severity: Severity::Error,
        counted: false,
        check: audits::favorites,
    },
    RuleSpec {
        code: "PR-ST-3",
        severity: Severity::Error,
        counted: true,
        check: program_rules::rule_has_action,
    },
    RuleSpec {
        code: "PRV-MQ-1",
        severity: Severity::Error,
        counted: false,
        check: program_rules::variable_names_unique,
    },
    RuleSpec {
        code: "PRV-MQ-2",
        severity: Severity::Error,
        counted: false,
        check: program_rules::variable_name_format,
    },
    RuleSpec {
        code: "PR-ST-4",
        severity: Severity::Error,
        counted: false,
        check: program_rules::action_data_element_in_program,
    },
    RuleSpec {
        code: "PR-ST-5",
        severity: Severity::Error,
        counted: false,
        check: program_rules::action_attribute_in_program,
    },
    RuleSpec {
        code: "ALL-MQ-17",
        severity: Severity::Warning,
        counted: false,
        check: codes::code_present,
    },
    RuleSpec {
        code: "ALL-MQ-18",
        severity: Severity::Error,
        counted: true,
        check: codes::code_tab_repair,
    },
    RuleSpec {
        code: "ALL-MQ-18",
        severity: Severity::Error,
        counted: true,
        check: codes::code_format,
    },
];

/// Evaluate the whole catalog against `package`, routing every
/// violation into `sink`.
pub fn run(package: &mut MetadataPackage, sink: &mut DiagnosticSink) {
    for rule in CATALOG {
        for message in (rule.check)(package) {
            sink.emit(rule.severity, rule.code, message, rule.counted);
        }
    }
}

/// Run one full validation pass and return the populated sink.
pub fn validate(package: &mut MetadataPackage) -> DiagnosticSink {
    let mut sink = DiagnosticSink::new();
    run(package, &mut sink);
    sink
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(code: &str, counted: bool) -> usize {
        CATALOG
            .iter()
            .position(|rule| rule.code == code && rule.counted == counted)
            .unwrap_or_else(|| panic!("rule {code} missing from catalog"))
    }

    #[test]
    fn counted_rules_are_exactly_the_designated_set() {
        let counted: Vec<&str> = CATALOG
            .iter()
            .filter(|rule| rule.counted)
            .map(|rule| rule.code)
            .collect();
        assert_eq!(counted, vec!["O-MQ-2", "PR-ST-3", "ALL-MQ-18", "ALL-MQ-18"]);
    }

    #[test]
    fn only_code_presence_is_a_warning() {
        for rule in CATALOG {
            match rule.code {
                "ALL-MQ-17" => assert_eq!(rule.severity, Severity::Warning),
                _ => assert_eq!(rule.severity, Severity::Error, "{}", rule.code),
            }
        }
    }

    #[test]
    fn tab_repair_runs_before_format_check() {
        // Both ALL-MQ-18 entries are counted; the repair is the first.
        let repair = position("ALL-MQ-18", true);
        let format = CATALOG
            .iter()
            .rposition(|rule| rule.code == "ALL-MQ-18")
            .unwrap();
        assert!(repair < format);
    }

    #[test]
    fn warnings_are_never_counted() {
        for rule in CATALOG {
            if rule.severity == Severity::Warning {
                assert!(!rule.counted, "{} is a counted warning", rule.code);
            }
        }
    }
}
