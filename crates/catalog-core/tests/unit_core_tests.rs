//! Unit tests for core catalog types
//!
//! Tests conditions, schema definitions and the query descriptor as seen by
//! downstream crates.

use catalog_core::query::{param_name, placeholder};
use catalog_core::schema::SchemaValidator;
use catalog_core::*;

// =============================================================================
// Condition Tests
// =============================================================================

#[test]
fn test_condition_in_list_values() {
    let cond = FilterCondition::in_list("color", vec!["Mono".to_string(), "Color".to_string()]);
    assert_eq!(cond.operator, FilterOperator::In);
    assert_eq!(
        cond.value,
        Value::Array(vec![Value::from("Mono"), Value::from("Color")])
    );
}

#[test]
fn test_condition_not_in_values() {
    let cond = FilterCondition::not_in("interface", vec!["A".to_string()]);
    assert_eq!(cond.operator, FilterOperator::NotIn);
    assert_eq!(cond.value.as_array().map(|a| a.len()), Some(1));
}

#[test]
fn test_condition_range_bounds_only_for_pairs() {
    assert_eq!(FilterCondition::eq("dpi", 1.0).range_bounds(), None);
    assert_eq!(
        FilterCondition::between("dpi", 1.0, 2.0).range_bounds(),
        Some((1.0, 2.0))
    );
}

#[test]
fn test_condition_json_roundtrip_keeps_custom_sql() {
    let cond = FilterCondition::custom("pixel_size", "pixel_size>=8 AND pixel_size<=16");
    let json = serde_json::to_string(&cond).unwrap();
    let back: FilterCondition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cond);
}

// =============================================================================
// Schema Tests
// =============================================================================

#[test]
fn test_schema_deserialize_category() {
    let json = r#"{
        "tableName": "cis_products",
        "columns": [{"key": "partnumber", "label": "Part Number"}],
        "filters": [
            {"name": "DPI", "type": "checkbox", "param": "dpi",
             "options": [{"display": "4800", "value": "4800"}]},
            {"name": "Scan Width", "type": "slider", "param": "scan_width",
             "unit": "mm", "range": [0, 2000], "tick": 10}
        ]
    }"#;

    let config: CategoryFilterConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.table_name, "cis_products");
    assert_eq!(config.filters.len(), 2);
    assert_eq!(config.filters[1].kind, FilterKind::Slider);
    assert_eq!(config.filters[1].tick, 10.0);
    assert!(SchemaValidator::new().validate("cis", &config).is_ok());
}

#[test]
fn test_schema_rejects_mismatched_kind() {
    let json = r#"{"name": "DPI", "type": "slider", "param": "dpi",
                   "options": [{"display": "4800", "value": "4800"}]}"#;
    let def: FilterDefinition = serde_json::from_str(json).unwrap();
    assert!(SchemaValidator::new().validate_filter(&def).is_err());
}

// =============================================================================
// Query Descriptor Tests
// =============================================================================

#[test]
fn test_filter_query_default_is_empty() {
    let query = FilterQuery::default();
    assert!(query.is_empty());
    assert!(query.ordered_values().is_empty());
}

#[test]
fn test_filter_query_serializes_parameters() {
    let mut query = FilterQuery::default();
    query.sql = format!("dpi = {}", placeholder(1));
    query.parameters.insert(param_name(1), Value::Number(4800.0));

    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["sql"], "dpi = :p1");
    assert_eq!(json["parameters"]["p1"], 4800.0);
}
