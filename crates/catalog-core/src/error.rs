//! Error types for Catalog Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid filter definition '{param}': {message}")]
    InvalidFilter { param: String, message: String },

    #[error("Duplicate filter param '{param}' in category '{category}'")]
    DuplicateParam { category: String, param: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
