//! Per-widget condition builders

use catalog_core::{FilterCondition, FilterOperator, FilterOption, Value};
use catalog_parser::{parse_filter_value, parse_sql_condition, RangeToken};

/// One condition per selected checkbox token
///
/// Conditions for the same param are meant to be OR-ed by the caller.
pub fn build_checkbox_filter<S: AsRef<str>>(field: &str, selected: &[S]) -> Vec<FilterCondition> {
    selected
        .iter()
        .map(|token| parse_filter_value(field, token.as_ref()))
        .collect()
}

/// Checkbox tokens, each replaced by its option's `sql_condition` when set
///
/// Tokens without an override parse like [`build_checkbox_filter`].
pub fn build_option_checkbox_filter<S: AsRef<str>>(
    field: &str,
    options: &[FilterOption],
    selected: &[S],
) -> Vec<FilterCondition> {
    selected
        .iter()
        .map(|token| {
            let token = token.as_ref();
            match options
                .iter()
                .find(|o| o.value == token)
                .and_then(|o| o.sql_condition.as_deref())
            {
                Some(sql) => parse_sql_condition(field, sql),
                None => parse_filter_value(field, token),
            }
        })
        .collect()
}

/// Slider selection; a point range collapses to `eq`
pub fn build_slider_filter(field: &str, [min, max]: [f64; 2]) -> Vec<FilterCondition> {
    if min == max {
        vec![FilterCondition::eq(field, min)]
    } else {
        vec![FilterCondition::between(field, min, max)]
    }
}

/// Possibly open slider range decoded from the URL
pub fn build_range_filter(field: &str, range: &RangeToken) -> Vec<FilterCondition> {
    match (range.min, range.max) {
        (Some(min), Some(max)) => build_slider_filter(field, [min, max]),
        (Some(min), None) => vec![FilterCondition::new(
            field,
            FilterOperator::Gte,
            Value::Number(min),
        )],
        (None, Some(max)) => vec![FilterCondition::new(
            field,
            FilterOperator::Lte,
            Value::Number(max),
        )],
        (None, None) => Vec::new(),
    }
}

/// Resolve selected option values through their `sql_condition` overrides
///
/// Overrides in the token grammar parse as tokens; raw predicate text
/// becomes `custom`. A selected value with no matching option, or whose
/// option has no override, becomes a plain `eq` on the raw value.
pub fn build_advanced_filter_conditions<S: AsRef<str>>(
    field: &str,
    options: &[FilterOption],
    selected: &[S],
) -> Vec<FilterCondition> {
    selected
        .iter()
        .map(|value| {
            let value = value.as_ref();
            match options.iter().find(|o| o.value == value) {
                Some(FilterOption {
                    sql_condition: Some(sql),
                    ..
                }) => parse_sql_condition(field, sql),
                Some(_) => FilterCondition::eq(field, value),
                None => {
                    tracing::debug!("No option '{}' for '{}', matching raw value", value, field);
                    FilterCondition::eq(field, value)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_tokens_parse_independently() {
        let conds = build_checkbox_filter("dpi", &["4800", ">=1000"]);
        assert_eq!(conds[0], FilterCondition::eq("dpi", 4800.0));
        assert_eq!(conds[1].operator, FilterOperator::Gte);
    }

    #[test]
    fn test_slider_collapse() {
        assert_eq!(
            build_slider_filter("f", [5.0, 5.0]),
            vec![FilterCondition::eq("f", 5.0)]
        );
        assert_eq!(
            build_slider_filter("f", [5.0, 10.0]),
            vec![FilterCondition::between("f", 5.0, 10.0)]
        );
    }

    #[test]
    fn test_open_ranges() {
        let conds = build_range_filter("line_rate", &RangeToken::new(Some(5000.0), None));
        assert_eq!(conds[0].operator, FilterOperator::Gte);
        let conds = build_range_filter("line_rate", &RangeToken::new(None, Some(999.0)));
        assert_eq!(conds[0].operator, FilterOperator::Lte);
        assert!(build_range_filter("line_rate", &RangeToken::default()).is_empty());
    }

    #[test]
    fn test_advanced_conditions_use_overrides() {
        let options = vec![
            FilterOption::new("High speed", "fast").with_sql_condition(">=10 AND p_item1<=40"),
            FilterOption::new("Mono", "Mono"),
        ];
        let conds = build_advanced_filter_conditions("line_rate", &options, &["fast", "Mono", "other"]);
        assert_eq!(conds[0].operator, FilterOperator::Custom);
        assert_eq!(
            conds[0].custom_sql.as_deref(),
            Some("line_rate>=10 AND line_rate<=40")
        );
        assert_eq!(conds[1], FilterCondition::eq("line_rate", "Mono"));
        assert_eq!(conds[2], FilterCondition::eq("line_rate", "other"));
    }

    #[test]
    fn test_raw_override_is_not_a_literal_match() {
        let options = vec![FilterOption::new("3600 dpi and up", "high").with_sql_condition("dpi >= 3600")];
        let conds = build_advanced_filter_conditions("dpi", &options, &["high"]);
        assert_eq!(conds, vec![FilterCondition::custom("dpi", "dpi >= 3600")]);
    }
}
