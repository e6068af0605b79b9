//! Legacy registry example
//!
//! This example demonstrates:
//! - Loading the legacy registry keyed by product type and subcategory code
//! - Layering subcategory filters over the common filters
//! - Option-level sqlCondition overrides in the compiled query
//!
//! Run with: cargo run --example legacy_registry

use catalog_compiler::{build_advanced_filter_conditions, Compiler};
use catalog_registry::{KeyStrategy, SchemaRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Legacy Registry Example ===\n");

    let registry = SchemaRegistry::builtin(KeyStrategy::LegacyCode);
    for key in registry.keys() {
        let codes: Vec<&str> = registry
            .sub_categories(key)
            .iter()
            .map(|sub| sub.code.as_str())
            .collect();
        println!("{}: subcategories {:?}", key, codes);
    }

    // Leading zeros on the code are ignored
    let filters = registry.get_sub_category_filters("camera", "01013");
    println!("\ncamera/1013 filters:");
    for filter in &filters {
        println!("  {:<8} {} ({:?})", filter.param, filter.name, filter.kind);
    }

    let Some(dpi) = filters.iter().find(|f| f.param == "p_item6") else {
        return Err("p_item6 missing from camera/1013".into());
    };

    let conditions = build_advanced_filter_conditions(&dpi.param, dpi.options(), &["high", "600"]);
    let query = Compiler::new().compile_grouped(&[conditions])?;

    println!("\nSelected 'high' and '600':");
    println!("  Where:  {}", query.sql);
    println!("  Params: {}", serde_json::to_string(&query.parameters)?);

    Ok(())
}
