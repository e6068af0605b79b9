//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed URL query string
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// Category not present in the registry
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] catalog_compiler::CompileError),

    /// Registry loading error
    #[error("Registry error: {0}")]
    RegistryError(#[from] catalog_registry::RegistryError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("max_page_size must be at least 1".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("max_page_size"));
    }

    #[test]
    fn test_unknown_category() {
        let error = SdkError::UnknownCategory("thermal".to_string());
        assert_eq!(error.to_string(), "Unknown category: thermal");
    }

    #[test]
    fn test_invalid_query() {
        let error = SdkError::InvalidQuery("bad percent-encoding in 'dpi'".to_string());
        assert!(error.to_string().starts_with("Invalid query string"));
    }

    #[test]
    fn test_compile_error_conversion() {
        let compile = catalog_compiler::CompileError::UnsafeCustomSql {
            field: "dpi".to_string(),
            pattern: "drop".to_string(),
        };
        let sdk_error: SdkError = compile.into();
        assert!(sdk_error.to_string().starts_with("Compiler error: Unsafe custom SQL"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }
}
