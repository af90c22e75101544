//! # Diagnostic Sink
//!
//! Severity-tagged diagnostics and the running error count for one
//! validation run. The sink is an explicit object constructed per run
//! and threaded through the rule driver — there is no process-wide
//! logging state behind it.
//!
//! ## Counting Contract
//!
//! Not every error-severity diagnostic contributes to the error count:
//! each emission carries a `counted` flag supplied by the rule table,
//! and only counted error-severity emissions increment the total.
//! Warnings never count. The count is what decides the process exit
//! status, so which rules set the flag is part of the external
//! contract.

use std::fmt;

use serde::Serialize;

/// Severity of one diagnostic. Two levels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A package-quality invariant is violated.
    Error,
    /// Advisory finding, never affects the error count.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// One finding produced by a rule, tagged with the rule's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity the rule assigns to its violations.
    pub severity: Severity,
    /// Stable rule code, e.g. `O-MQ-2`.
    pub code: &'static str,
    /// Human-readable description of the violating instance.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} - {} - {}", self.severity, self.code, self.message)
    }
}

/// Append-only accumulator of diagnostics plus the error count.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticSink {
    /// A fresh sink with no diagnostics and a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic. The error count increases only when
    /// `counted` is set and the severity is [`Severity::Error`].
    pub fn emit(&mut self, severity: Severity, code: &'static str, message: String, counted: bool) {
        if counted && severity == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(Diagnostic {
            severity,
            code,
            message,
        });
    }

    /// Number of counted errors so far. Non-zero means the package
    /// failed validation.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// All diagnostics in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the sink, keeping only the diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_errors_increment_the_total() {
        let mut sink = DiagnosticSink::new();
        sink.emit(Severity::Error, "O-MQ-2", "bad sort order".into(), true);
        sink.emit(Severity::Error, "O-MQ-2", "bad sort order".into(), true);
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.diagnostics().len(), 2);
    }

    #[test]
    fn uncounted_errors_are_logged_but_not_counted() {
        let mut sink = DiagnosticSink::new();
        sink.emit(Severity::Error, "OG-MQ-1", "orphan option".into(), false);
        assert_eq!(sink.error_count(), 0);
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn warnings_never_count_even_when_flagged() {
        let mut sink = DiagnosticSink::new();
        sink.emit(Severity::Warning, "ALL-MQ-17", "missing code".into(), true);
        assert_eq!(sink.error_count(), 0);
    }

    #[test]
    fn display_format_is_stable() {
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            code: "PR-ST-3",
            message: "Program Rule 'X' (pr1) without Program Rule Action".into(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "* ERROR - PR-ST-3 - Program Rule 'X' (pr1) without Program Rule Action"
        );
    }

    #[test]
    fn diagnostics_preserve_emission_order() {
        let mut sink = DiagnosticSink::new();
        sink.emit(Severity::Warning, "ALL-MQ-17", "first".into(), false);
        sink.emit(Severity::Error, "ALL-MQ-18", "second".into(), true);
        let codes: Vec<&str> = sink.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["ALL-MQ-17", "ALL-MQ-18"]);
    }
}
