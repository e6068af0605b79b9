//! Catalog Compiler - filter conditions to parameterised WHERE clauses
//!
//! This crate turns [`FilterCondition`](catalog_core::FilterCondition) lists
//! into a [`FilterQuery`](catalog_core::FilterQuery): an AND-joined clause
//! template with `:pN` placeholders and the values bound to them.
//!
//! - [`where_clause`]: clause emission and grouped composition
//! - [`builders`]: per-widget condition builders (checkbox, slider, advanced)
//! - [`filter_query`]: active filter selections to a compiled query
//! - [`compiler`]: the configurable [`Compiler`] front end

pub mod builders;
pub mod compiler;
pub mod error;
pub mod filter_query;
pub mod where_clause;

pub use builders::{
    build_advanced_filter_conditions, build_checkbox_filter, build_option_checkbox_filter,
    build_range_filter, build_slider_filter,
};
pub use compiler::{Compiler, CompilerOptions, CustomSqlPolicy};
pub use error::{CompileError, Result};
pub use filter_query::{
    build_filter_query, build_grouped_filter_query, ActiveFilter, FilterSelection,
};
pub use where_clause::{build_grouped_where_clause, build_where_clause};
