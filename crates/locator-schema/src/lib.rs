//! # locator-schema — Locator Document Validation
//!
//! Loads a JSON document and the locator JSON Schema, compiles the schema,
//! and produces an ordered [`ValidationReport`].
//!
//! ## Pipeline
//!
//! - [`load_document`] / [`load_schema`]: read and parse from disk.
//! - [`CompiledSchema::compile`]: meta-validate and compile the schema.
//! - [`DocumentValidator::validate`]: check a document, yielding every
//!   violation in validator order.
//!
//! Each step fails with a distinct [`SchemaError`] variant so callers can
//! tell an unreadable input from a malformed schema. A document that does
//! not satisfy the schema is a normal outcome and is returned as a report,
//! not an error.
//!
//! ## Crate Policy
//!
//! - No network access: external `$ref` URIs are refused at compile time.
//! - The schema path is always passed explicitly; [`DEFAULT_SCHEMA_FILE`]
//!   is only a default for callers.

pub mod error;
pub mod load;
pub mod validate;

pub use error::{ErrorCategory, SchemaError};
pub use load::{load_document, load_schema, DEFAULT_SCHEMA_FILE};
pub use validate::{CompiledSchema, DocumentValidator, ValidationReport, Violation};
