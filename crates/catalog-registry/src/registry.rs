//! Schema registry lookups

use crate::error::{RegistryError, RegistryResult};
use crate::models::{CategoryEntry, RegistryFile, SubCategory};
use crate::strategy::{normalize_alias, KeyStrategy};
use catalog_core::schema::SchemaValidator;
use catalog_core::{CategoryFilterConfig, FilterDefinition};
use std::collections::HashMap;

/// Read-only category → filter schema registry
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    strategy: KeyStrategy,
    entries: Vec<CategoryEntry>,
    /// Category-level configs, parallel to `entries`
    configs: Vec<CategoryFilterConfig>,
    by_key: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build a registry, validating every category and subcategory
    pub fn new(strategy: KeyStrategy, file: RegistryFile) -> RegistryResult<Self> {
        let validator = SchemaValidator::new();
        let mut by_key = HashMap::new();
        let mut by_alias = HashMap::new();

        for (index, entry) in file.categories.iter().enumerate() {
            let key = strategy.normalize_key(&entry.key);
            if by_key.insert(key.clone(), index).is_some() {
                return Err(RegistryError::DuplicateKey { key });
            }

            for alias in &entry.aliases {
                let alias = normalize_alias(alias);
                if let Some(previous) = by_alias.insert(alias.clone(), index) {
                    if previous != index {
                        return Err(RegistryError::DuplicateKey { key: alias });
                    }
                }
            }

            validator
                .validate_filters(&entry.key, &entry.filters)
                .map_err(|errors| RegistryError::invalid_schema(&entry.key, &errors))?;

            let mut codes = Vec::new();
            for sub in &entry.sub_categories {
                let label = format!("{}/{}", entry.key, sub.code);
                let code = strategy.normalize_code(&sub.code);
                if codes.contains(&code) {
                    return Err(RegistryError::DuplicateKey { key: label });
                }
                codes.push(code);

                validator
                    .validate_filters(&label, &sub.filters)
                    .map_err(|errors| RegistryError::invalid_schema(&label, &errors))?;
            }
        }

        let configs = file.categories.iter().map(CategoryEntry::config).collect();

        tracing::info!(
            "Loaded {} categories into {:?} registry",
            file.categories.len(),
            strategy
        );

        Ok(Self {
            strategy,
            entries: file.categories,
            configs,
            by_key,
            by_alias,
        })
    }

    pub fn strategy(&self) -> KeyStrategy {
        self.strategy
    }

    /// Category keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entry by key
    pub fn entry(&self, key: &str) -> Option<&CategoryEntry> {
        self.index_by_key(key).map(|i| &self.entries[i])
    }

    /// Canonical key for a key or display name
    pub fn resolve_key(&self, name: &str) -> Option<&str> {
        self.index_by_name(name).map(|i| self.entries[i].key.as_str())
    }

    /// Config for a display name such as `"Line Scan Camera"`; keys also match
    pub fn get_config_by_category_name(&self, display_name: &str) -> Option<&CategoryFilterConfig> {
        self.index_by_name(display_name).map(|i| &self.configs[i])
    }

    /// Config for a category key / legacy product type
    pub fn get_config_by_product_type(&self, type_key: &str) -> Option<&CategoryFilterConfig> {
        self.index_by_key(type_key).map(|i| &self.configs[i])
    }

    /// Subcategories of a product type
    pub fn sub_categories(&self, product_type: &str) -> &[SubCategory] {
        self.entry(product_type)
            .map(|e| e.sub_categories.as_slice())
            .unwrap_or(&[])
    }

    /// Common filters of `product_type` with the subcategory's filters layered on
    ///
    /// A subcategory filter replaces the common filter with the same param in
    /// place; filters with new params are appended. An unknown code yields the
    /// common filters, an unknown product type an empty list.
    pub fn get_sub_category_filters(
        &self,
        product_type: &str,
        sub_category_code: &str,
    ) -> Vec<FilterDefinition> {
        let Some(entry) = self.entry(product_type) else {
            tracing::warn!("Unknown product type '{}'", product_type);
            return Vec::new();
        };

        let mut merged = entry.filters.clone();
        let code = self.strategy.normalize_code(sub_category_code);
        match entry
            .sub_categories
            .iter()
            .find(|sub| self.strategy.normalize_code(&sub.code) == code)
        {
            Some(sub) => {
                for filter in &sub.filters {
                    upsert_by_param(&mut merged, filter);
                }
            }
            None => tracing::debug!(
                "No subcategory '{}' under '{}', using common filters",
                sub_category_code,
                product_type
            ),
        }
        merged
    }

    /// Filters of several categories merged by param
    ///
    /// The first occurrence of a param fixes its position; the definition kept
    /// is the one from the last category that defines it. Unknown names are
    /// skipped.
    pub fn get_category_filters<S: AsRef<str>>(&self, names: &[S]) -> Vec<FilterDefinition> {
        let mut merged = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.get_config_by_category_name(name) {
                Some(config) => {
                    for filter in &config.filters {
                        upsert_by_param(&mut merged, filter);
                    }
                }
                None => tracing::warn!("Unknown category '{}'", name),
            }
        }
        merged
    }

    fn index_by_key(&self, key: &str) -> Option<usize> {
        self.by_key.get(&self.strategy.normalize_key(key)).copied()
    }

    fn index_by_name(&self, name: &str) -> Option<usize> {
        self.by_alias
            .get(&normalize_alias(name))
            .copied()
            .or_else(|| self.index_by_key(name))
    }
}

fn upsert_by_param(merged: &mut Vec<FilterDefinition>, filter: &FilterDefinition) {
    match merged.iter_mut().find(|m| m.param == filter.param) {
        Some(slot) => *slot = filter.clone(),
        None => merged.push(filter.clone()),
    }
}
