//! Condition types for filter tokens

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Inclusive range, value is `[min, max]`
    Between,
    /// Membership, value is an array
    In,
    /// Negated membership, value is an array
    NotIn,
    /// Case-insensitive substring match
    Like,
    /// Raw predicate carried in `custom_sql`
    Custom,
}

impl FilterOperator {
    /// Returns true for the single-operand comparison operators
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            FilterOperator::Eq
                | FilterOperator::Ne
                | FilterOperator::Gt
                | FilterOperator::Gte
                | FilterOperator::Lt
                | FilterOperator::Lte
        )
    }

    /// SQL symbol for comparison operators
    pub fn sql_symbol(&self) -> Option<&'static str> {
        match self {
            FilterOperator::Eq => Some("="),
            FilterOperator::Ne => Some("!="),
            FilterOperator::Gt => Some(">"),
            FilterOperator::Gte => Some(">="),
            FilterOperator::Lt => Some("<"),
            FilterOperator::Lte => Some("<="),
            _ => None,
        }
    }

    /// Wire name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Between => "between",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Like => "like",
            FilterOperator::Custom => "custom",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    /// Backend field the condition targets
    pub field: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Scalar, `[min, max]` pair, or array depending on the operator
    pub value: Value,
    /// Field-relativized predicate, only set for `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_sql: Option<String>,
}

impl FilterCondition {
    /// Create a new condition
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
            custom_sql: None,
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOperator::Eq, value.into())
    }

    /// Inclusive range condition
    pub fn between(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(
            field,
            FilterOperator::Between,
            Value::Array(vec![Value::Number(min), Value::Number(max)]),
        )
    }

    /// Membership condition over string values
    pub fn in_list(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(
            field,
            FilterOperator::In,
            Value::Array(values.into_iter().map(Value::String).collect()),
        )
    }

    /// Negated membership condition over string values
    pub fn not_in(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(
            field,
            FilterOperator::NotIn,
            Value::Array(values.into_iter().map(Value::String).collect()),
        )
    }

    pub fn like(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Like, Value::String(text.into()))
    }

    /// Opaque predicate; `sql` must already reference the real field name
    pub fn custom(field: impl Into<String>, sql: impl Into<String>) -> Self {
        let sql = sql.into();
        Self {
            field: field.into(),
            operator: FilterOperator::Custom,
            value: Value::String(sql.clone()),
            custom_sql: Some(sql),
        }
    }

    /// The `[min, max]` pair of a `between` condition
    pub fn range_bounds(&self) -> Option<(f64, f64)> {
        match self.value.as_array() {
            Some([min, max]) => Some((min.as_f64()?, max.as_f64()?)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_is_comparison() {
        assert!(FilterOperator::Eq.is_comparison());
        assert!(FilterOperator::Gte.is_comparison());
        assert!(!FilterOperator::Between.is_comparison());
        assert!(!FilterOperator::Custom.is_comparison());
    }

    #[test]
    fn test_operator_serde_names() {
        let json = serde_json::to_string(&FilterOperator::NotIn).unwrap();
        assert_eq!(json, r#""not_in""#);
        let op: FilterOperator = serde_json::from_str(r#""gte""#).unwrap();
        assert_eq!(op, FilterOperator::Gte);
        assert_eq!(FilterOperator::Like.to_string(), "like");
    }

    #[test]
    fn test_between_bounds() {
        let cond = FilterCondition::between("scan_width", 100.0, 499.0);
        assert_eq!(cond.operator, FilterOperator::Between);
        assert_eq!(cond.range_bounds(), Some((100.0, 499.0)));
        assert!(cond.custom_sql.is_none());
    }

    #[test]
    fn test_custom_condition_carries_sql() {
        let cond = FilterCondition::custom("pixel", "pixel>=8 AND pixel<=16");
        assert_eq!(cond.operator, FilterOperator::Custom);
        assert_eq!(cond.custom_sql.as_deref(), Some("pixel>=8 AND pixel<=16"));
    }

    #[test]
    fn test_condition_serde_shape() {
        let cond = FilterCondition::eq("dpi", 4800.0);
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "dpi", "operator": "eq", "value": 4800.0})
        );

        let custom = FilterCondition::custom("f", "f>1");
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["customSql"], "f>1");
    }
}
