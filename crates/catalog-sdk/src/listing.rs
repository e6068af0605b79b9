//! Listing query assembly
//!
//! Combines the registry, a [`FilterState`] and the [`CatalogConfig`] into
//! one backend-agnostic [`ListingQuery`]:
//!
//! - selected categories → `IN` on the category field
//! - free-text terms → `like` over the configured columns, OR-ed
//! - each filter param → its conditions OR-ed, params AND-ed

use crate::config::CatalogConfig;
use crate::error::{Result, SdkError};
use crate::filter_state::{FilterState, SortOrder};
use catalog_compiler::Compiler;
use catalog_core::{CategoryFilterConfig, FilterCondition, FilterQuery};
use catalog_registry::SchemaRegistry;
use serde::{Deserialize, Serialize};

/// Sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

/// Everything the persistence layer needs to fetch one listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub table: String,
    pub filter: FilterQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    pub limit: usize,
    pub offset: usize,
}

impl ListingQuery {
    /// 1-based page number
    pub fn page(&self) -> usize {
        self.offset / self.limit.max(1) + 1
    }
}

/// Builds [`ListingQuery`] values from filter states
pub struct CatalogQueryBuilder<'a> {
    registry: &'a SchemaRegistry,
    config: &'a CatalogConfig,
    compiler: &'a Compiler,
}

impl<'a> CatalogQueryBuilder<'a> {
    pub fn new(
        registry: &'a SchemaRegistry,
        config: &'a CatalogConfig,
        compiler: &'a Compiler,
    ) -> Self {
        Self {
            registry,
            config,
            compiler,
        }
    }

    /// Build the listing query for a state
    pub fn build(&self, state: &FilterState) -> Result<ListingQuery> {
        let resolved = self.resolve_categories(&state.categories);
        let definitions = self.registry.get_category_filters(&state.categories);
        let mut groups: Vec<Vec<FilterCondition>> = Vec::new();

        if !state.categories.is_empty() {
            let keys: Vec<String> = state
                .categories
                .iter()
                .map(|name| {
                    self.registry
                        .resolve_key(name)
                        .map(str::to_string)
                        .unwrap_or_else(|| name.trim().to_string())
                })
                .collect();
            groups.push(vec![FilterCondition::in_list(
                self.config.category_field.as_str(),
                keys,
            )]);
        }

        for (key, term) in state.search_terms() {
            match self.config.search_field(key) {
                Some(field) => groups.push(
                    field
                        .columns
                        .iter()
                        .map(|column| FilterCondition::like(column.as_str(), term))
                        .collect(),
                ),
                None => tracing::debug!("No columns configured for search key '{}'", key),
            }
        }

        for filter in state.active_filters(&definitions) {
            groups.push(filter.conditions());
        }

        let filter = self.compiler.compile_grouped(&groups)?;

        let table = match resolved.as_slice() {
            [config] => config.table_name.clone(),
            _ => self.config.default_table.clone(),
        };

        let limit = state
            .limit
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);
        let page = state.page.unwrap_or(1).max(1);
        let offset = (page - 1).checked_mul(limit).ok_or_else(|| {
            SdkError::InvalidQuery(format!("page {} is out of range for limit {}", page, limit))
        })?;

        let query = ListingQuery {
            table,
            filter,
            sort: self.sort_spec(state, &resolved),
            limit,
            offset,
        };

        tracing::debug!(
            "Listing query on '{}' with {} parameters (page {})",
            query.table,
            query.filter.parameters.len(),
            page
        );
        Ok(query)
    }

    fn resolve_categories(&self, names: &[String]) -> Vec<&'a CategoryFilterConfig> {
        names
            .iter()
            .filter_map(|name| {
                let config = self.registry.get_config_by_category_name(name);
                if config.is_none() {
                    tracing::warn!("Unknown category '{}' in listing", name);
                }
                config
            })
            .collect()
    }

    fn sort_spec(&self, state: &FilterState, resolved: &[&CategoryFilterConfig]) -> Option<SortSpec> {
        let field = state.sort.as_deref()?;
        let allowed = self.config.sortable_fields.iter().any(|f| f == field)
            || resolved.iter().any(|config| config.has_column(field));

        if !allowed {
            tracing::warn!("Ignoring sort on '{}': not a listing column", field);
            return None;
        }

        Some(SortSpec {
            field: field.to_string(),
            order: state.order.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Value;

    fn build(state: &FilterState) -> ListingQuery {
        let config = CatalogConfig::default();
        let compiler = Compiler::new();
        CatalogQueryBuilder::new(SchemaRegistry::current(), &config, &compiler)
            .build(state)
            .unwrap()
    }

    #[test]
    fn test_empty_state_lists_everything() {
        let query = build(&FilterState::new());
        assert_eq!(query.table, "products");
        assert!(query.filter.is_empty());
        assert_eq!((query.limit, query.offset), (20, 0));
    }

    #[test]
    fn test_single_category_uses_its_table() {
        let query = build(&FilterState::for_categories(vec!["CIS"]));
        assert_eq!(query.table, "cis_products");
        assert_eq!(query.filter.sql, "category IN (:p1)");
        assert_eq!(query.filter.parameters["p1"], Value::from("cis"));
    }

    #[test]
    fn test_pagination_is_clamped() {
        let mut state = FilterState::new();
        state.page = Some(3);
        state.limit = Some(10_000);
        let query = build(&state);
        assert_eq!(query.limit, 100);
        assert_eq!(query.offset, 200);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn test_sort_must_be_a_column() {
        let mut state = FilterState::for_categories(vec!["cis"]);
        state.sort = Some("dpi".to_string());
        state.order = Some(SortOrder::Desc);
        let sort = build(&state).sort.unwrap();
        assert_eq!(sort.field, "dpi");
        assert_eq!(sort.order, SortOrder::Desc);

        state.sort = Some("dpi; DROP TABLE x".to_string());
        assert!(build(&state).sort.is_none());
    }
}
