//! # Schema Validation
//!
//! Compiles a JSON Schema document with the `jsonschema` crate and checks
//! documents against it.
//!
//! ## Draft Selection
//!
//! The draft comes from the schema's own `$schema` keyword. Schemas that
//! declare none are compiled as draft-04. The schema is checked
//! against its meta-schema during compilation, so a structurally invalid
//! schema never reaches validation.
//!
//! ## Reference Resolution
//!
//! Only references internal to the schema (`#/definitions/...`) resolve.
//! Any `$ref` to an external URI is refused by [`OfflineRetriever`]; there
//! is no network or filesystem lookup.
//!
//! ## Report Invariant
//!
//! A [`ValidationReport`] is a success if and only if it holds no
//! violations. Validators that compute a verdict separately must pass it
//! through [`ValidationReport::from_verdict`], which rejects a mismatch.

use std::fmt;

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::error::SchemaError;

/// Retriever that refuses every external reference.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference '{}' is not resolved (offline)", uri.as_str()).into())
    }
}

/// A single validation message with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the document. Empty for the root.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Message text from the validator.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered violations from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Build a report from violations in validator order.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Build a report from a validator that also returns its own verdict.
    ///
    /// # Errors
    ///
    /// `SchemaError::InconsistentReport` when `success` disagrees with
    /// whether `violations` is empty.
    pub fn from_verdict(success: bool, violations: Vec<Violation>) -> Result<Self, SchemaError> {
        if success != violations.is_empty() {
            return Err(SchemaError::InconsistentReport {
                success,
                violations: violations.len(),
            });
        }
        Ok(Self::new(violations))
    }

    /// True when the document satisfied the schema.
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in the order the validator produced them.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Checks a document against a schema bound at construction time.
pub trait DocumentValidator {
    /// Validate `document`, returning every violation in order.
    ///
    /// # Errors
    ///
    /// Only for faults in the validator itself, never for a document that
    /// fails the schema.
    fn validate(&self, document: &Value) -> Result<ValidationReport, SchemaError>;
}

/// A schema compiled by the `jsonschema` crate.
pub struct CompiledSchema {
    validator: Validator,
    declared_draft: Option<String>,
}

impl CompiledSchema {
    /// Compile a parsed schema document.
    ///
    /// # Errors
    ///
    /// `SchemaError::SchemaCompile` if the schema fails its meta-schema,
    /// declares an unknown draft, or references an external URI.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let declared_draft = schema
            .get("$schema")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut opts = jsonschema::options();
        if declared_draft.is_none() {
            opts.with_draft(jsonschema::Draft::Draft4);
        }
        opts.with_retriever(OfflineRetriever);
        let validator = opts
            .build(schema)
            .map_err(|e| SchemaError::SchemaCompile {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            draft = declared_draft.as_deref().unwrap_or("draft-04 (undeclared)"),
            "compiled schema"
        );

        Ok(Self {
            validator,
            declared_draft,
        })
    }

    /// The `$schema` URI the schema declared, if any.
    pub fn declared_draft(&self) -> Option<&str> {
        self.declared_draft.as_deref()
    }
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("declared_draft", &self.declared_draft)
            .finish_non_exhaustive()
    }
}

impl DocumentValidator for CompiledSchema {
    fn validate(&self, document: &Value) -> Result<ValidationReport, SchemaError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        ValidationReport::from_verdict(self.validator.is_valid(document), violations)
    }
}
