//! Listing query example
//!
//! This example demonstrates:
//! - Rebuilding filter state from a listing URL
//! - Compiling it into a parameterized listing query
//! - Driving a filter session with a debounced slider
//!
//! Run with: cargo run --example listing_query

use catalog_sdk::{Catalog, CatalogConfig, RangeToken};
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Listing Query Example ===\n");

    let catalog = Catalog::new(CatalogConfig::default())?;
    println!("Categories: {:?}\n", catalog.categories());

    let url = "category=cis&dpi=4800&dpi=3600&scan_width=%5B100%2C499%5D&sort=dpi&order=desc";
    println!("URL query: {}\n", url);

    let state = catalog.parse_state(url)?;
    let query = catalog.listing_query(&state)?;

    println!("Listing query:");
    println!("  Table:  {}", query.table);
    println!("  Where:  {}", query.filter.sql);
    println!("  $-form: {}", query.filter.to_dollar_sql());
    println!("  Params: {:?}", query.filter.ordered_values());
    println!("  Page:   {} (limit {}, offset {})", query.page(), query.limit, query.offset);
    println!("\nAs JSON:\n{}\n", serde_json::to_string_pretty(&query)?);

    // Interactive session: toggles apply at once, slider drags wait for a quiet period
    let mut session = catalog.session(state);
    session.toggle_option("color", "Mono");

    let start = Instant::now();
    session.drag_slider("line_rate", RangeToken::closed(20.0, 150.0), start);
    session.drag_slider("line_rate", RangeToken::closed(40.0, 150.0), start + Duration::from_millis(100));
    println!("Pending slider drag: {}", session.has_pending());

    session.flush_due(start + Duration::from_millis(200));
    println!("After 200ms: pending = {}", session.has_pending());

    session.flush_due(start + Duration::from_secs(1));
    println!("After 1s:    {}", session.query_string());

    let query = catalog.listing_query(session.state())?;
    println!("  Where:  {}", query.filter.sql);

    Ok(())
}
