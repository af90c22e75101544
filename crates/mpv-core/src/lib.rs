//! # mpv-core — Foundational Types for the Metadata Package Validator
//!
//! This crate is the bedrock of the validator. It defines the document
//! model and the small set of generic mechanisms that every rule builds
//! on. The rule catalog lives in `mpv-rules`; this crate depends on
//! nothing internal.
//!
//! ## Components
//!
//! 1. **Document model and normalizer** (`document`). A metadata package
//!    is one JSON object mapping resource-type names to arrays of
//!    resource objects. `normalize()` is a pure function that returns a
//!    package with every guaranteed collection present, so rule code
//!    never special-cases a missing collection.
//!
//! 2. **Recursive visitor** (`visitor`). Schema-agnostic traversal that
//!    hands every key/value pair at any depth to a callback. Used by the
//!    package-wide audits that must never miss a nested occurrence.
//!
//! 3. **Reference index builder** (`index`). Deep extraction of the
//!    identifier sets behind nested reference fields, for subset and
//!    membership checks.
//!
//! 4. **Name resolver** (`resolve`). Identifier-to-name lookup for
//!    diagnostic messages. Presentation only, never control flow.
//!
//! 5. **Diagnostic sink** (`diagnostics`). An explicit per-run
//!    accumulator of severity-tagged messages and the error count. No
//!    global logging state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mpv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod index;
pub mod resolve;
pub mod visitor;

// Re-export primary types for ergonomic imports.
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use document::{
    normalize, ref_id, seq_field, str_field, MetadataPackage, NORMALIZED_COLLECTIONS,
    RECOGNIZED_COLLECTIONS,
};
pub use error::DocumentError;
pub use index::extract_nested_ids;
pub use resolve::resource_name;
pub use visitor::walk;
