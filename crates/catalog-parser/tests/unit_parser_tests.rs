//! Unit tests for the filter token parser and range codec
//!
//! Covers the token grammar priority order, the literal fallback policy and
//! the URL range-token codec.

use catalog_core::{FilterCondition, FilterOperator, Value};
use catalog_parser::*;

// =============================================================================
// Token Parser Tests
// =============================================================================

#[test]
fn test_bracketed_pair_wins_over_eq() {
    let cond = parse_filter_value("f", "[100,499]");
    assert_eq!(cond.operator, FilterOperator::Between);
    assert_eq!(
        cond.value,
        Value::Array(vec![Value::Number(100.0), Value::Number(499.0)])
    );
}

#[test]
fn test_not_in_values() {
    let cond = parse_filter_value("f", "NOT IN ('A','B')");
    assert_eq!(cond.operator, FilterOperator::NotIn);
    assert_eq!(
        cond.value,
        Value::Array(vec![Value::from("A"), Value::from("B")])
    );
}

#[test]
fn test_gte_inequality() {
    let cond = parse_filter_value("f", ">=1000");
    assert_eq!(cond.operator, FilterOperator::Gte);
    assert_eq!(cond.value, Value::Number(1000.0));
}

#[test]
fn test_plain_enum_fallback() {
    let cond = parse_filter_value("f", "Mono");
    assert_eq!(cond.operator, FilterOperator::Eq);
    assert_eq!(cond.value, Value::from("Mono"));
}

#[test]
fn test_whitespace_trimmed_before_matching() {
    assert_eq!(
        parse_filter_value("dpi", "   4800\t"),
        FilterCondition::eq("dpi", 4800.0)
    );
    assert_eq!(
        parse_filter_value("f", "  >= 12.5 ").operator,
        FilterOperator::Gte
    );
}

#[test]
fn test_fractional_specs_use_floats() {
    let cond = parse_filter_value("magnification", "0.25");
    assert_eq!(cond.value, Value::Number(0.25));

    let cond = parse_filter_value("pixel_size", "BETWEEN 3.45 AND 7.04");
    assert_eq!(cond.range_bounds(), Some((3.45, 7.04)));
}

#[test]
fn test_custom_keeps_placeholder_predicate_opaque() {
    let cond = parse_filter_value("line_rate", ">=10 AND p_item7<=40");
    assert_eq!(cond.operator, FilterOperator::Custom);
    assert_eq!(cond.field, "line_rate");
    assert_eq!(
        cond.custom_sql.as_deref(),
        Some("line_rate>=10 AND line_rate<=40")
    );
}

#[test]
fn test_parser_never_panics_on_odd_input() {
    for token in ["", "[", "[1,]", "BETWEEN AND", "NOT IN", ">=", "<<5", "--", "[a,b]"] {
        let cond = parse_filter_value("f", token);
        assert_eq!(cond.operator, FilterOperator::Eq, "token {:?}", token);
        assert_eq!(cond.value, Value::from(token.trim()));
    }
}

#[test]
fn test_empty_not_in_body_gives_empty_list() {
    let cond = parse_filter_value("f", "NOT IN ()");
    assert_eq!(cond.operator, FilterOperator::NotIn);
    assert_eq!(cond.value, Value::Array(vec![]));
}

// =============================================================================
// Range Codec Tests
// =============================================================================

#[test]
fn test_range_roundtrip_for_non_negative_pairs() {
    let mut a = 0.0;
    while a <= 50.0 {
        let b = a * 3.0 + 0.5;
        let decoded = decode_range_token(&encode_range_token(Some(a), Some(b)));
        assert_eq!(decoded, RangeToken::closed(a, b));
        a += 2.5;
    }
}

#[test]
fn test_single_sided_ranges() {
    assert_eq!(encode_range_token(Some(5000.0), None), "5000-");
    assert_eq!(
        decode_range_token("5000-"),
        RangeToken::new(Some(5000.0), None)
    );
    assert_eq!(encode_range_token(None, Some(999.0)), "-999");
    assert_eq!(decode_range_token("-999"), RangeToken::new(None, Some(999.0)));
}

#[test]
fn test_range_token_serializes() {
    let json = serde_json::to_value(RangeToken::new(Some(1.0), None)).unwrap();
    assert_eq!(json, serde_json::json!({"min": 1.0, "max": null}));
}

// =============================================================================
// Legacy Renderer / Safety Tests
// =============================================================================

#[test]
fn test_legacy_renderer_matches_structured_for_registry_tokens() {
    for token in ["<1000", "BETWEEN 1000 AND 4000", "NOT IN ('CL')", "Color", "7.04"] {
        assert_eq!(
            legacy_inline_predicate("attr", token),
            render_inline(&parse_filter_value("attr", token))
        );
    }
}

#[test]
fn test_safety_screen() {
    assert!(validate_filter_value(">=8 AND p_item4<=16"));
    assert!(!validate_filter_value("1 UNION SELECT * FROM admins"));
}
