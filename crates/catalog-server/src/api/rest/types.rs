//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use catalog_sdk::{Catalog, FilterCondition, KeyStrategy, ListingQuery, TokenForm, Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of categories in the loaded registry
    pub categories: usize,
}

/// One registry entry, without its filters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub key: String,
    pub aliases: Vec<String>,
    pub table_name: String,
    pub filter_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<String>,
}

/// Category listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub key_strategy: KeyStrategy,
    pub categories: Vec<CategorySummary>,
}

/// Listing query for a URL query string
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQueryResponse {
    #[serde(flatten)]
    pub query: ListingQuery,

    /// 1-based page number
    pub page: usize,

    /// Filter SQL with `$N` positional placeholders
    pub positional_sql: String,

    /// Parameter values in `$N` order
    pub positional_params: Vec<Value>,

    /// Query string re-serialized from the parsed state
    pub canonical_query: String,
}

/// Token parse request
#[derive(Debug, Deserialize)]
pub struct ParseTokenRequest {
    pub field: String,
    pub token: String,
}

/// Token parse response
#[derive(Debug, Serialize)]
pub struct ParseTokenResponse {
    pub condition: FilterCondition,
    pub form: TokenForm,
    /// Inline predicate text, for display only
    pub inline: String,
    /// False when the token trips the deny-list
    pub safe: bool,
}
