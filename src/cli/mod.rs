//! CLI support for sieve-lang
//!
//! Provides programmatic access to the `sieve` CLI functionality for
//! embedding in other tools.

mod check;
mod convert;
mod docs;
mod translate;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{bindings_from_json, json_to_value};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use translate::{Target, execute_suggest, execute_translate};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Syntax(#[from] crate::SyntaxError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    /// JSON parsing or printing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Bindings were valid JSON but not an object of scalars
    #[error("Invalid bindings: {0}")]
    InvalidBindings(String),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'sieve docs' to see available categories.")]
    UnknownCategory(String),
}
