//! # Validation Flow
//!
//! Parses the single `PATH` argument, loads the document and schema,
//! validates, and maps the outcome to an [`ExitStatus`].
//!
//! The steps run strictly in order and every failure before the report
//! exists is fatal. Diagnostics and violations go to the caller-supplied
//! error sink (stderr in the binary).

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use locator_schema::{
    load_document, load_schema, CompiledSchema, DocumentValidator, SchemaError,
    ValidationReport, DEFAULT_SCHEMA_FILE,
};

/// Program name used in diagnostics.
pub const BIN_NAME: &str = "locator-validate";

/// Validate a JSON document against locatorSchema.json.
///
/// Prints one line per violation to stderr and exits 0 when the document
/// is valid, 1 when it is not, and 2 on any fatal error.
#[derive(Parser, Debug)]
#[command(name = "locator-validate", version, about)]
pub struct ValidateArgs {
    /// JSON document to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Process outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The document satisfied the schema.
    Valid,
    /// The document violated the schema.
    Invalid,
    /// The run aborted before a report existed.
    Fatal,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::Fatal => 2,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Settings that are fixed for the binary but explicit for library callers.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Schema file; relative paths resolve against the working directory.
    pub schema_path: PathBuf,
}

impl RunConfig {
    pub fn with_schema_path(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::with_schema_path(DEFAULT_SCHEMA_FILE)
    }
}

/// Run the validator with the default configuration, writing to stderr.
///
/// `args` includes the program name in position zero, as `std::env::args_os`
/// yields it.
pub fn run<I, T>(args: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stderr = io::stderr();
    let mut sink = stderr.lock();
    run_with(args, &RunConfig::default(), &mut sink)
}

/// Run the validator, writing diagnostics and violations to `err`.
pub fn run_with<I, T, W>(args: I, config: &RunConfig, err: &mut W) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match ValidateArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            if let Err(io_err) = e.print() {
                tracing::warn!(error = %io_err, "failed to print help");
            }
            return ExitStatus::Valid;
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "usage error");
            let rendered = format!("{BIN_NAME}: usage error\n{}", e.render());
            write_or_log(err, rendered.trim_end());
            return ExitStatus::Fatal;
        }
    };

    match validate_path(&args.path, &config.schema_path) {
        Ok(report) => {
            tracing::info!(
                path = %args.path.display(),
                violations = report.len(),
                valid = report.is_success(),
                "validation finished"
            );
            for violation in report.violations() {
                write_or_log(err, &violation.to_string());
            }
            if report.is_success() {
                ExitStatus::Valid
            } else {
                ExitStatus::Invalid
            }
        }
        Err(e) => {
            tracing::error!(category = %e.category(), "{e}");
            write_or_log(err, &format!("{BIN_NAME}: {}: {e}", e.category()));
            ExitStatus::Fatal
        }
    }
}

/// Load, compile, and validate. Steps run in the documented order so the
/// first failing step names the error.
fn validate_path(document_path: &Path, schema_path: &Path) -> Result<ValidationReport, SchemaError> {
    let document = load_document(document_path)?;
    let schema = load_schema(schema_path)?;
    let compiled = CompiledSchema::compile(&schema)?;
    compiled.validate(&document)
}

fn write_or_log<W: Write>(err: &mut W, line: &str) {
    if let Err(e) = writeln!(err, "{line}") {
        tracing::warn!(error = %e, "failed to write to error stream");
    }
}
