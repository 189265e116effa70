//! # Error Types
//!
//! Every fatal condition the validator can hit before a report exists.
//! A document that merely fails the schema is not an error; it is a
//! [`ValidationReport`](crate::ValidationReport) with violations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error while loading inputs or compiling the schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The target document could not be read from disk.
    #[error("cannot read '{}': {source}", path.display())]
    DocumentRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The target document is not valid JSON.
    #[error("invalid JSON in '{}': {source}", path.display())]
    DocumentParse {
        /// Path of the malformed document.
        path: PathBuf,
        /// Parser failure, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The schema file could not be read from disk.
    #[error("cannot read '{}': {source}", path.display())]
    SchemaRead {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("invalid JSON in '{}': {source}", path.display())]
    SchemaParse {
        /// Path of the malformed schema.
        path: PathBuf,
        /// Parser failure, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The schema parsed as JSON but is not a usable JSON Schema.
    #[error("{reason}")]
    SchemaCompile {
        /// Reason reported by the schema compiler.
        reason: String,
    },

    /// A validator returned a verdict that disagrees with its own messages.
    #[error("validator reported success={success} with {violations} violation(s)")]
    InconsistentReport {
        /// Verdict claimed by the validator.
        success: bool,
        /// Number of violations it returned alongside the verdict.
        violations: usize,
    },
}

impl SchemaError {
    /// The pipeline step that failed.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentRead { .. } => ErrorCategory::DocumentRead,
            Self::DocumentParse { .. } => ErrorCategory::DocumentParse,
            Self::SchemaRead { .. } => ErrorCategory::SchemaRead,
            Self::SchemaParse { .. } => ErrorCategory::SchemaParse,
            Self::SchemaCompile { .. } => ErrorCategory::SchemaCompile,
            Self::InconsistentReport { .. } => ErrorCategory::InconsistentReport,
        }
    }
}

/// Stable classification of a [`SchemaError`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DocumentRead,
    DocumentParse,
    SchemaRead,
    SchemaParse,
    SchemaCompile,
    InconsistentReport,
}

impl ErrorCategory {
    /// Human-readable label, e.g. `"schema compile error"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentRead => "document read error",
            Self::DocumentParse => "document parse error",
            Self::SchemaRead => "schema read error",
            Self::SchemaParse => "schema parse error",
            Self::SchemaCompile => "schema compile error",
            Self::InconsistentReport => "inconsistent validation report",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
