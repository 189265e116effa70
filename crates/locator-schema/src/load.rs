//! # Document Loading
//!
//! Reads the target document and the schema from disk. Each read opens,
//! consumes, and closes its file before parsing begins.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;

/// File name of the schema, resolved against the working directory.
pub const DEFAULT_SCHEMA_FILE: &str = "locatorSchema.json";

/// Read and parse the document to be validated.
///
/// # Errors
///
/// `SchemaError::DocumentRead` if the file is missing or unreadable,
/// `SchemaError::DocumentParse` if it is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| SchemaError::DocumentParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
    Ok(value)
}

/// Read and parse the schema document.
///
/// # Errors
///
/// `SchemaError::SchemaRead` if the file is missing or unreadable,
/// `SchemaError::SchemaParse` if it is not valid JSON.
pub fn load_schema(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| SchemaError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded schema");
    Ok(value)
}
