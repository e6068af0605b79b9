//! Filter token parsing example
//!
//! This example demonstrates:
//! - Parsing each token form into a structured condition
//! - The URL range-token codec
//! - Rendering conditions as inline predicate text
//!
//! Run with: cargo run --example token_parsing

use catalog_parser::{
    decode_range_token, encode_range_token, render_inline, validate_filter_value,
    FilterTokenParser,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Token Parsing Example ===\n");

    let parser = FilterTokenParser::new();
    let tokens = [
        ("scan_width", "[100,499]"),
        ("scan_width", "BETWEEN 500 AND 999"),
        ("interface", "NOT IN ('CL','GigE')"),
        ("line_rate", ">=100"),
        ("pixel_size", ">=8 AND p_item4<=16"),
        ("dpi", "4800"),
        ("color", "Mono"),
    ];

    println!("1. Token forms:");
    for (field, token) in tokens {
        let condition = parser.parse(field, token);
        println!("   {:<28} {:?}", token, parser.classify(token));
        println!("   {:<28} → {}", "", render_inline(&condition));
    }

    println!("\n2. Range tokens:");
    for (min, max) in [(Some(100.0), Some(499.0)), (Some(5000.0), None), (None, Some(999.0))] {
        let token = encode_range_token(min, max);
        println!("   {:?}..{:?} → '{}' → {:?}", min, max, token, decode_range_token(&token));
    }

    println!("\n3. Deny-list screen:");
    for value in ["Dropout compensation", "1; DROP TABLE products"] {
        let verdict = if validate_filter_value(value) { "✓" } else { "✗" };
        println!("   {} {}", verdict, value);
    }
}
