//! Catalog Parser - filter token parsing for the catalog filter engine
//!
//! This crate turns the compact encoded values stored in filter definitions
//! and URLs into structured [`FilterCondition`](catalog_core::FilterCondition)s:
//! - `token_parser`: one filter token into one condition (never fails)
//! - `range_codec`: slider ranges to and from a single URL token
//! - `legacy`: the legacy inline predicate renderer
//! - `safety`: advisory deny-list screen for raw predicate text

pub mod error;
pub mod legacy;
pub mod range_codec;
pub mod safety;
pub mod token_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use legacy::{legacy_inline_predicate, render_inline};
pub use range_codec::{decode_range_token, encode_range_token, RangeToken};
pub use safety::validate_filter_value;
pub use token_parser::{parse_filter_value, parse_sql_condition, FilterTokenParser, TokenForm};
