//! Builder pattern for Catalog

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use catalog_compiler::CompilerOptions;
use catalog_registry::{KeyStrategy, SchemaRegistry};
use std::path::PathBuf;

/// Builder for Catalog
///
/// # Example
///
/// ```
/// use catalog_sdk::CatalogBuilder;
/// use catalog_registry::KeyStrategy;
///
/// // Built-in legacy registry
/// let catalog = CatalogBuilder::new()
///     .with_key_strategy(KeyStrategy::LegacyCode)
///     .build()
///     .unwrap();
/// assert!(catalog.category_config("camera").is_ok());
/// ```
pub struct CatalogBuilder {
    config: CatalogConfig,
    registry: Option<SchemaRegistry>,
}

impl CatalogBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::new(),
            registry: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Pick a built-in registry
    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.config.key_strategy = strategy;
        self
    }

    /// Load the registry from a file instead of the built-in data
    pub fn with_registry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.registry_file = Some(path.into());
        self
    }

    /// Use an already loaded registry
    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set compiler options
    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.config.compiler_options = options;
        self
    }

    /// Build the catalog
    pub fn build(self) -> Result<Catalog> {
        let mut config = self.config;
        config.validate()?;

        let registry = match (self.registry, &config.registry_file) {
            (Some(registry), _) => registry,
            (None, Some(path)) => SchemaRegistry::from_path(config.key_strategy, path)?,
            (None, None) => SchemaRegistry::builtin(config.key_strategy).clone(),
        };
        config.key_strategy = registry.strategy();

        tracing::info!(
            "Catalog ready: {} categories, {:?} keys",
            registry.len(),
            registry.strategy()
        );
        Ok(Catalog::from_parts(config, registry))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
