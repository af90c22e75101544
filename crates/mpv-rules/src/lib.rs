//! # mpv-rules — Package-Quality Rule Catalog
//!
//! The validation rules for a metadata package, organized as a fixed,
//! ordered table of independent entries evaluated by one generic
//! driver. Each rule reads a well-defined slice of the document and
//! returns one message per violating instance; the driver routes the
//! messages into the [`DiagnosticSink`](mpv_core::DiagnosticSink)
//! together with the rule's code, severity, and counting flag.
//!
//! ## Rule Independence
//!
//! Rules are mutually independent; the table order affects only the
//! ordering of messages, with one exception: the tab-stripping code
//! repair mutates the `code` fields that the code-format check reads,
//! so the repair entry must stay ahead of the format entry.
//!
//! ## Crate Policy
//!
//! - Depends only on `mpv-core` internally.
//! - Rules never fail and never panic; a malformed slice of the
//!   document produces diagnostics or is skipped per the shape policy,
//!   it does not abort the run.

pub mod audits;
pub mod catalog;
pub mod codes;
pub mod options;
pub mod program_rules;

pub use catalog::{run, validate, RuleSpec, CATALOG};
