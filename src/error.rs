use thiserror::Error;

/// Application-level errors for jex
#[derive(Debug, Error)]
pub enum JexError {
    #[error("jq binary not found in PATH.\n\nInstall jq from: https://jqlang.org/download/")]
    JqNotFound,

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a query evaluator
///
/// The session never shows these to the user verbatim; they are folded into
/// a failed outcome and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("evaluation error: {0}")]
    Runtime(String),

    #[error("jq: {0}")]
    Jq(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
