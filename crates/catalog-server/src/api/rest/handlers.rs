//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use catalog_core::{CategoryFilterConfig, FilterDefinition};
use catalog_parser::{render_inline, validate_filter_value};
use tracing::{debug, info};

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        categories: state.catalog.registry().len(),
    })
}

/// Registry entries in registry order
pub(super) async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let registry = state.catalog.registry();
    let categories = registry
        .keys()
        .filter_map(|key| registry.entry(key))
        .map(|entry| CategorySummary {
            key: entry.key.clone(),
            aliases: entry.aliases.clone(),
            table_name: entry.table_name.clone(),
            filter_count: entry.filters.len(),
            sub_categories: entry.sub_categories.iter().map(|s| s.code.clone()).collect(),
        })
        .collect();

    Json(CategoriesResponse {
        key_strategy: registry.strategy(),
        categories,
    })
}

/// Filter schema of one category, by key or display name
pub(super) async fn category_config(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryFilterConfig>, ServerError> {
    let config = state.catalog.category_config(&name)?;
    Ok(Json(config.clone()))
}

/// Filter definitions of one category
pub(super) async fn category_filters(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<FilterDefinition>>, ServerError> {
    let config = state.catalog.category_config(&name)?;
    Ok(Json(config.filters.clone()))
}

/// Common filters of a product type with one subcategory layered on
pub(super) async fn sub_category_filters(
    State(state): State<AppState>,
    Path((product_type, code)): Path<(String, String)>,
) -> Result<Json<Vec<FilterDefinition>>, ServerError> {
    let registry = state.catalog.registry();
    if registry.entry(&product_type).is_none() {
        return Err(ServerError::NotFound(format!(
            "Unknown product type: {}",
            product_type
        )));
    }
    Ok(Json(registry.get_sub_category_filters(&product_type, &code)))
}

/// Listing query for the request's own query string
pub(super) async fn products_query(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ListingQueryResponse>, ServerError> {
    let qs = query.unwrap_or_default();
    let filter_state = state.catalog.parse_state(&qs)?;
    let listing = state.catalog.listing_query(&filter_state)?;

    info!(
        "Built listing query on '{}' with {} parameters",
        listing.table,
        listing.filter.parameters.len()
    );

    Ok(Json(ListingQueryResponse {
        page: listing.page(),
        positional_sql: listing.filter.to_dollar_sql(),
        positional_params: listing.filter.ordered_values().into_iter().cloned().collect(),
        canonical_query: filter_state.to_query_string(),
        query: listing,
    }))
}

/// Parse a single filter token
pub(super) async fn parse_token(
    State(state): State<AppState>,
    Json(payload): Json<ParseTokenRequest>,
) -> Result<Json<ParseTokenResponse>, ServerError> {
    let field = payload.field.trim();
    if field.is_empty() {
        return Err(ServerError::InvalidRequest("field must not be empty".to_string()));
    }

    let condition = state.catalog.parse_token(field, &payload.token);
    let form = state.catalog.classify_token(&payload.token);
    debug!("Token '{}' on '{}' parsed as {:?}", payload.token, field, form);

    Ok(Json(ParseTokenResponse {
        inline: render_inline(&condition),
        safe: validate_filter_value(&payload.token),
        form,
        condition,
    }))
}
