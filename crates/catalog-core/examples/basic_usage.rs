//! Basic usage example for catalog-core
//!
//! Run with: cargo run --example basic_usage

use catalog_core::schema::SchemaValidator;
use catalog_core::{CategoryFilterConfig, FilterCondition, FilterDefinition, FilterOption};

fn main() {
    println!("=== Catalog Core Basic Usage Example ===\n");

    // Example 1: Building conditions by hand
    println!("1. Conditions:");
    let dpi = FilterCondition::eq("dpi", 4800.0);
    let width = FilterCondition::between("scan_width", 100.0, 499.0);
    println!("   {:?}", dpi);
    println!("   {:?}\n", width);

    // Example 2: A category schema
    println!("2. Category schema:");
    let config = CategoryFilterConfig::new("cis_products").with_filters(vec![
        FilterDefinition::checkbox(
            "DPI",
            "dpi",
            vec![
                FilterOption::new("4800 dpi", "4800"),
                FilterOption::new("3600 dpi", "3600"),
            ],
        ),
        FilterDefinition::slider("Scan Width", "scan_width", 0.0, 2000.0).with_unit("mm"),
    ]);
    println!("   {} filters on {}", config.filters.len(), config.table_name);

    // Example 3: Validating the schema invariants
    println!("\n3. Validation:");
    match SchemaValidator::new().validate("cis", &config) {
        Ok(()) => println!("   ✓ schema is valid"),
        Err(errors) => {
            for err in errors {
                println!("   ✗ {}", err);
            }
        }
    }
}
