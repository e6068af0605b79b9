//! Data models for registry files

use catalog_core::{CategoryFilterConfig, ColumnDefinition, FilterDefinition};
use serde::{Deserialize, Serialize};

/// Top-level shape of a registry YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// One category (current registry) or product type (legacy registry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    /// Lookup key: slug (`cis`) or product type (`camera`)
    pub key: String,

    /// Display names resolving to this entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    pub table_name: String,

    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,

    /// Filters of the entry; the legacy files call these `commonFilters`
    #[serde(default, alias = "commonFilters")]
    pub filters: Vec<FilterDefinition>,

    /// Legacy subcategories keyed by numeric code
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<SubCategory>,
}

impl CategoryEntry {
    /// The category-level filter config
    pub fn config(&self) -> CategoryFilterConfig {
        CategoryFilterConfig::new(&self.table_name)
            .with_columns(self.columns.clone())
            .with_filters(self.filters.clone())
    }
}

/// Subcategory-specific filters layered over the common ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Numeric category code, e.g. `"1012"`
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
}
