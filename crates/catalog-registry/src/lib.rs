//! Category filter schema registry for the product catalog
//!
//! This crate answers one question: which filters apply to a product
//! category. Two registries ship with it:
//!
//! - **current**: keyed by lowercase slug (`cis`, `tdi`, `linescan`, ...)
//! - **legacy**: keyed by product type (`camera`, `lens`), with numeric
//!   subcategory codes (`"1012"`) whose filters override the common ones
//!
//! Both are served by the same [`SchemaRegistry`]; a [`KeyStrategy`] decides
//! how lookup keys are normalised. Lookups never fail: an unknown category
//! yields `None` or an empty list.
//!
//! # Quick Start
//!
//! ```
//! use catalog_registry::SchemaRegistry;
//!
//! let registry = SchemaRegistry::current();
//! let cis = registry.get_config_by_category_name("CIS").unwrap();
//! assert!(cis.filter("dpi").is_some());
//!
//! // Legacy: common camera filters with the area-scan overrides applied
//! let filters = SchemaRegistry::legacy().get_sub_category_filters("camera", "1012");
//! assert_eq!(filters[1].param, "p_item2");
//! ```
//!
//! # Loading Override Files
//!
//! ```no_run
//! use catalog_registry::{KeyStrategy, SchemaRegistry};
//!
//! # fn main() -> Result<(), catalog_registry::RegistryError> {
//! let registry = SchemaRegistry::from_path(KeyStrategy::Slug, "config/registry.yaml")?;
//! for key in registry.keys() {
//!     println!("{}", key);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod registry;
pub mod strategy;

pub use error::{RegistryError, RegistryResult};
pub use models::{CategoryEntry, RegistryFile, SubCategory};
pub use registry::SchemaRegistry;
pub use strategy::KeyStrategy;
