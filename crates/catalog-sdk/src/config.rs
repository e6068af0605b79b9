//! Configuration types for the catalog SDK

use crate::error::{Result, SdkError};
use catalog_compiler::CompilerOptions;
use catalog_registry::KeyStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A free-text URL key and the columns it searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchField {
    /// URL key (`partnumber`, `series`, `search`)
    pub key: String,
    /// Columns matched with `like`, OR-ed together
    pub columns: Vec<String>,
}

impl SearchField {
    pub fn new(key: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            key: key.into(),
            columns,
        }
    }
}

/// Main catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Which built-in registry to use
    pub key_strategy: KeyStrategy,

    /// Optional registry file replacing the built-in data
    pub registry_file: Option<PathBuf>,

    /// Table used when the listing does not resolve to exactly one category
    pub default_table: String,

    /// Field matched against the selected categories
    pub category_field: String,

    /// Free-text search keys
    pub search_fields: Vec<SearchField>,

    /// Sort fields accepted for every category
    pub sortable_fields: Vec<String>,

    pub default_page_size: usize,
    pub max_page_size: usize,

    /// Quiet period before a slider drag is committed
    pub slider_debounce_ms: u64,

    /// Compiler options
    pub compiler_options: CompilerOptions,
}

impl CatalogConfig {
    /// Create a new catalog configuration
    pub fn new() -> Self {
        Self {
            key_strategy: KeyStrategy::Slug,
            registry_file: None,
            default_table: "products".to_string(),
            category_field: "category".to_string(),
            search_fields: vec![
                SearchField::new("partnumber", vec!["partnumber".to_string()]),
                SearchField::new("series", vec!["series".to_string()]),
                SearchField::new(
                    "search",
                    vec!["partnumber".to_string(), "series".to_string()],
                ),
            ],
            sortable_fields: vec!["partnumber".to_string(), "series".to_string()],
            default_page_size: 20,
            max_page_size: 100,
            slider_debounce_ms: 300,
            compiler_options: CompilerOptions::default(),
        }
    }

    /// Set the registry key strategy
    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }

    /// Set registry file
    pub fn with_registry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_file = Some(path.into());
        self
    }

    pub fn with_default_table(mut self, table: impl Into<String>) -> Self {
        self.default_table = table.into();
        self
    }

    pub fn with_category_field(mut self, field: impl Into<String>) -> Self {
        self.category_field = field.into();
        self
    }

    /// Add or replace the columns searched by a URL key
    pub fn with_search_field(mut self, key: impl Into<String>, columns: Vec<String>) -> Self {
        let field = SearchField::new(key, columns);
        match self.search_fields.iter_mut().find(|f| f.key == field.key) {
            Some(existing) => *existing = field,
            None => self.search_fields.push(field),
        }
        self
    }

    /// Set default and maximum page size
    pub fn with_page_sizes(mut self, default: usize, max: usize) -> Self {
        self.default_page_size = default;
        self.max_page_size = max;
        self
    }

    pub fn with_slider_debounce(mut self, debounce: Duration) -> Self {
        self.slider_debounce_ms = debounce.as_millis() as u64;
        self
    }

    /// Set compiler options
    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.compiler_options = options;
        self
    }

    pub fn slider_debounce(&self) -> Duration {
        Duration::from_millis(self.slider_debounce_ms)
    }

    pub fn search_field(&self, key: &str) -> Option<&SearchField> {
        self.search_fields.iter().find(|f| f.key == key)
    }

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(SdkError::ConfigError(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(SdkError::ConfigError(format!(
                "max_page_size ({}) is smaller than default_page_size ({})",
                self.max_page_size, self.default_page_size
            )));
        }
        if self.category_field.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "category_field must not be empty".to_string(),
            ));
        }
        if let Some(field) = self.search_fields.iter().find(|f| f.columns.is_empty()) {
            return Err(SdkError::ConfigError(format!(
                "search field '{}' has no columns",
                field.key
            )));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slider_debounce(), Duration::from_millis(300));
        assert_eq!(config.search_field("search").unwrap().columns.len(), 2);
    }

    #[test]
    fn test_with_search_field_replaces() {
        let config = CatalogConfig::new().with_search_field("series", vec!["family".to_string()]);
        assert_eq!(config.search_fields.len(), 3);
        assert_eq!(config.search_field("series").unwrap().columns, vec!["family"]);
    }

    #[test]
    fn test_invalid_page_sizes() {
        let config = CatalogConfig::new().with_page_sizes(50, 10);
        assert!(matches!(config.validate(), Err(SdkError::ConfigError(_))));
        let config = CatalogConfig::new().with_page_sizes(0, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"key_strategy": "legacy_code", "max_page_size": 50}"#)
                .unwrap();
        assert_eq!(config.key_strategy, KeyStrategy::LegacyCode);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.default_page_size, 20);
    }
}
