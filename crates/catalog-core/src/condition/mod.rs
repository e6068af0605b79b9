//! Filter Condition Module
//!
//! Structured conditions produced from encoded filter tokens and consumed by
//! the query compiler.
//!
//! # Token Grammar
//!
//! ```text
//! [100,499]                     between 100 and 499
//! BETWEEN 500 AND 999           between 500 and 999
//! NOT IN ('A','B')              not in A, B
//! >=1000   <=1000   >8   <8     gte / lte / gt / lt
//! >=8 AND p_item4<=16           custom predicate, placeholder replaced by the field
//! 4800                          eq 4800
//! Mono                          eq "Mono"
//! ```
//!
//! ## Supported Operators
//! - `eq`, `ne`, `gt`, `gte`, `lt`, `lte`
//! - `between` (two-element value)
//! - `in`, `not_in` (array value)
//! - `like` (case-insensitive substring)
//! - `custom` (opaque predicate text in `custom_sql`)

mod types;

pub use types::{FilterCondition, FilterOperator};
