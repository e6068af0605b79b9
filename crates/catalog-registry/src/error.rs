//! Error types for the registry layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while loading a schema registry
///
/// Lookups never fail; an unknown category is `None` or an empty list.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry file not found at the specified path
    #[error("Registry file not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Two categories (or aliases, or subcategory codes) normalise to the same key
    #[error("Duplicate registry key: {key}")]
    DuplicateKey { key: String },

    /// A category's filter list breaks the schema invariants
    #[error("Invalid schema for '{category}': {message}")]
    InvalidSchema { category: String, message: String },
}

impl RegistryError {
    pub(crate) fn invalid_schema(category: &str, errors: &[catalog_core::CoreError]) -> Self {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        RegistryError::InvalidSchema {
            category: category.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::CoreError;

    #[test]
    fn test_invalid_schema_joins_messages() {
        let err = RegistryError::invalid_schema(
            "cis",
            &[
                CoreError::DuplicateParam {
                    category: "cis".to_string(),
                    param: "dpi".to_string(),
                },
                CoreError::InvalidFilter {
                    param: "line_rate".to_string(),
                    message: "slider filter requires a range".to_string(),
                },
            ],
        );
        let text = err.to_string();
        assert!(text.starts_with("Invalid schema for 'cis': Duplicate filter param 'dpi'"));
        assert!(text.contains("; Invalid filter definition 'line_rate'"));
    }

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::NotFound {
            path: PathBuf::from("/missing/registry.yaml"),
        };
        assert_eq!(err.to_string(), "Registry file not found: /missing/registry.yaml");
    }
}
