//! # locator-cli — Locator Document Validator
//!
//! Validates one JSON file against `locatorSchema.json` in the working
//! directory and reports the outcome through the exit code.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Document satisfies the schema |
//! | 1 | Document violates the schema; one violation per stderr line |
//! | 2 | Fatal: usage, document read/parse, schema read/parse/compile |
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the validation flow.
//! - Validation logic lives in `locator-schema`; this crate only sequences
//!   the steps and renders results.
//! - Standard output is never written by the validation flow.

pub mod run;

pub use run::{run, run_with, ExitStatus, RunConfig, ValidateArgs, BIN_NAME};
