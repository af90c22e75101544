//! # Error Types
//!
//! Structural errors raised at the document boundary. Rule evaluation
//! itself never fails; invariant violations flow through the
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) instead.

use thiserror::Error;

/// Error describing a document that cannot be normalized into a
/// [`MetadataPackage`](crate::document::MetadataPackage).
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document root is not a JSON object.
    #[error("document root is not a JSON object")]
    NotAnObject,

    /// A recognized resource-type key is present but its value is not
    /// an array.
    #[error("collection '{name}' is not an array")]
    InvalidCollection {
        /// The offending top-level key.
        name: String,
    },
}
