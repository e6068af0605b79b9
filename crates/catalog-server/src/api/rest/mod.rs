//! REST API implementation
//!
//! - types: Request/response type definitions
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration

mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use router::create_router;
pub use types::{
    AppState, CategoriesResponse, CategorySummary, HealthResponse, ListingQueryResponse,
    ParseTokenRequest, ParseTokenResponse,
};
