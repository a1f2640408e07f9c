//! Error types for schema resolution, binding, and document I/O.
//!
//! Every failure aborts the whole operation; there is no partial-success
//! mode. Errors carry enough identity (field name, schema name, path) to
//! point at the offending declaration or document.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for binding and document operations.
pub type ConfResult<T> = Result<T, ConfError>;

/// Errors raised while resolving types, binding instances, or reading and
/// writing documents.
#[derive(Debug, Error)]
pub enum ConfError {
    /// A field has no source value, no declared default, and is not
    /// schema-typed. Aborts construction of the entire instance.
    #[error("field '{field}' of schema '{schema}' has neither a set value nor a default")]
    MissingValue { field: String, schema: String },

    /// A type annotation names neither a native type nor a registered
    /// schema.
    #[error(
        "annotation '{annotation}' on field '{field}' of schema '{schema}' \
         names neither a native type nor a registered schema"
    )]
    UnresolvedType {
        annotation: String,
        field: String,
        schema: String,
    },

    /// Binding was requested against a schema name never registered.
    #[error("schema '{name}' is not registered")]
    UnknownSchema { name: String },

    /// Reading or writing the document file failed.
    #[error("failed to read or write document '{path}'")]
    DocumentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document file exists but is not parseable.
    #[error("malformed document '{path}': {reason}")]
    DocumentParse { path: PathBuf, reason: String },

    /// A value tree cannot be represented in the document format.
    #[error("document shape not supported: {reason}")]
    DocumentFormat { reason: String },
}
