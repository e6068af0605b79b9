//! Product catalog filter SDK
//!
//! High-level API over the registry, token parser and compiler:
//! URL filter state, listing queries and interactive filter sessions.
//!
//! ```
//! use catalog_sdk::Catalog;
//!
//! let catalog = Catalog::new(Default::default()).unwrap();
//! let query = catalog
//!     .query_for("category=cis&dpi=4800&dpi=3600&scan_width=[100,499]")
//!     .unwrap();
//! assert_eq!(query.table, "cis_products");
//! assert_eq!(
//!     query.filter.sql,
//!     "category IN (:p1) AND (dpi = :p2 OR dpi = :p3) AND scan_width BETWEEN :p4 AND :p5"
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter_state;
pub mod listing;
pub mod session;

// Re-export main types
pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use config::{CatalogConfig, SearchField};
pub use error::{Result, SdkError};
pub use filter_state::{FilterState, ParamValue, SortOrder};
pub use listing::{CatalogQueryBuilder, ListingQuery, SortSpec};
pub use session::{FilterSession, PendingRange};

// Re-export commonly used types from dependencies
pub use catalog_compiler::{CompilerOptions, CustomSqlPolicy};
pub use catalog_core::{FilterCondition, FilterOperator, FilterQuery, Value};
pub use catalog_parser::{RangeToken, TokenForm};
pub use catalog_registry::{KeyStrategy, SchemaRegistry};
