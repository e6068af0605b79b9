//! Registry loading
//!
//! The built-in registries are compiled into the binary from `data/` and
//! parsed once on first use. Deployments may load replacement files at
//! startup with [`SchemaRegistry::from_path`].

use crate::error::{RegistryError, RegistryResult};
use crate::models::RegistryFile;
use crate::registry::SchemaRegistry;
use crate::strategy::KeyStrategy;
use std::path::Path;
use std::sync::LazyLock;

const CURRENT_YAML: &str = include_str!("../data/current.yaml");
const LEGACY_YAML: &str = include_str!("../data/legacy.yaml");

static CURRENT: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::from_yaml_str(KeyStrategy::Slug, CURRENT_YAML)
        .expect("embedded current registry is valid")
});

static LEGACY: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::from_yaml_str(KeyStrategy::LegacyCode, LEGACY_YAML)
        .expect("embedded legacy registry is valid")
});

impl SchemaRegistry {
    /// Parse and validate a registry from YAML text
    pub fn from_yaml_str(strategy: KeyStrategy, yaml: &str) -> RegistryResult<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        Self::new(strategy, file)
    }

    /// Load a registry file from disk
    pub fn from_path(strategy: KeyStrategy, path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RegistryError::NotFound {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loading registry from {}", path.display());
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(strategy, &yaml)
    }

    /// Built-in slug-keyed registry
    pub fn current() -> &'static SchemaRegistry {
        &CURRENT
    }

    /// Built-in product-type / category-code registry
    pub fn legacy() -> &'static SchemaRegistry {
        &LEGACY
    }

    /// Built-in registry for a strategy
    pub fn builtin(strategy: KeyStrategy) -> &'static SchemaRegistry {
        match strategy {
            KeyStrategy::Slug => Self::current(),
            KeyStrategy::LegacyCode => Self::legacy(),
        }
    }
}
