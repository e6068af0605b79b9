//! Catalog facade
//!
//! One [`Catalog`] per process: a loaded registry, the configuration and a
//! compiler. Every method is a pure read, so it can be shared freely across
//! threads.

use crate::config::CatalogConfig;
use crate::error::{Result, SdkError};
use crate::filter_state::FilterState;
use crate::listing::{CatalogQueryBuilder, ListingQuery};
use crate::session::FilterSession;
use catalog_compiler::Compiler;
use catalog_core::{CategoryFilterConfig, FilterCondition, FilterDefinition};
use catalog_parser::{FilterTokenParser, TokenForm};
use catalog_registry::SchemaRegistry;

/// Product catalog filter engine
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    registry: SchemaRegistry,
    compiler: Compiler,
    parser: FilterTokenParser,
}

impl Catalog {
    pub(crate) fn from_parts(config: CatalogConfig, registry: SchemaRegistry) -> Self {
        let compiler = Compiler::with_options(config.compiler_options.clone());
        Self {
            config,
            registry,
            compiler,
            parser: FilterTokenParser::new(),
        }
    }

    /// Build a catalog with the given configuration
    pub fn new(config: CatalogConfig) -> Result<Self> {
        crate::builder::CatalogBuilder::new().with_config(config).build()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Category keys in registry order
    pub fn categories(&self) -> Vec<&str> {
        self.registry.keys().collect()
    }

    /// Config of a category by key or display name
    pub fn category_config(&self, name: &str) -> Result<&CategoryFilterConfig> {
        self.registry
            .get_config_by_category_name(name)
            .ok_or_else(|| SdkError::UnknownCategory(name.to_string()))
    }

    /// Filter definitions of several categories, merged by param
    pub fn filters_for<S: AsRef<str>>(&self, categories: &[S]) -> Vec<FilterDefinition> {
        self.registry.get_category_filters(categories)
    }

    /// Parse a single filter token
    pub fn parse_token(&self, field: &str, token: &str) -> FilterCondition {
        self.parser.parse(field, token)
    }

    /// Grammar rule a token matches
    pub fn classify_token(&self, token: &str) -> TokenForm {
        self.parser.classify(token)
    }

    /// Rebuild a filter state from a URL query string
    pub fn parse_state(&self, qs: &str) -> Result<FilterState> {
        FilterState::from_query_string_with(qs, |categories| self.filters_for(categories))
    }

    /// Listing query for a filter state
    pub fn listing_query(&self, state: &FilterState) -> Result<ListingQuery> {
        CatalogQueryBuilder::new(&self.registry, &self.config, &self.compiler).build(state)
    }

    /// Listing query straight from a URL query string
    pub fn query_for(&self, qs: &str) -> Result<ListingQuery> {
        let state = self.parse_state(qs)?;
        self.listing_query(&state)
    }

    /// Start an interactive session over a state
    pub fn session(&self, state: FilterState) -> FilterSession {
        let definitions = self.filters_for(&state.categories);
        FilterSession::new(state, definitions, self.config.slider_debounce())
    }
}
