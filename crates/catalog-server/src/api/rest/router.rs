//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use catalog_sdk::Catalog;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(catalog: Arc<Catalog>) -> Router {
    let state = AppState { catalog };

    Router::new()
        .route("/health", get(health))
        .route("/v1/categories", get(list_categories))
        .route("/v1/categories/:name", get(category_config))
        .route("/v1/categories/:name/filters", get(category_filters))
        .route(
            "/v1/categories/:name/subcategories/:code/filters",
            get(sub_category_filters),
        )
        .route("/v1/products/query", get(products_query))
        .route("/v1/filters/parse", post(parse_token))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
