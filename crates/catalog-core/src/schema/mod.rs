//! Category filter schema
//!
//! This module contains the per-category filter schema:
//! - Filter definitions (checkbox / slider)
//! - Category configuration (table, columns, filters)
//! - Invariant validation

pub mod definition;
pub mod validator;

pub use definition::{
    CategoryFilterConfig, ColumnDefinition, FilterDefinition, FilterKind, FilterOption,
};
pub use validator::SchemaValidator;
