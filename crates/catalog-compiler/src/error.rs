//! Compiler error types

use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// Custom predicate text rejected by the deny-list
    #[error("Unsafe custom SQL on field '{field}' (matched {pattern})")]
    UnsafeCustomSql { field: String, pattern: String },

    /// Condition whose value does not fit its operator
    #[error("Malformed condition on field '{field}': {message}")]
    MalformedCondition { field: String, message: String },
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
