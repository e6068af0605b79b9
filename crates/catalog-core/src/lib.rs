//! Catalog Core - Core types and definitions for the catalog filter engine
//!
//! This crate provides the fundamental types used across the catalog workspace:
//! - Value types for filter operands and bound parameters
//! - Filter conditions and operators
//! - Category filter schema definitions
//! - The compiled query descriptor
//! - Error types

pub mod condition;
pub mod error;
pub mod query;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use condition::{FilterCondition, FilterOperator};
pub use error::CoreError;
pub use query::FilterQuery;
pub use schema::{
    CategoryFilterConfig, ColumnDefinition, FilterDefinition, FilterKind, FilterOption,
};
pub use types::Value;
