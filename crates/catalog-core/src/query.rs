//! Compiled query descriptor
//!
//! `FilterQuery` is what the compiler hands to the persistence layer: an
//! AND-joined clause template with named positional placeholders (`:p1`,
//! `:p2`, ...) plus the values bound to them.

use crate::condition::FilterCondition;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix of every parameter name
pub const PARAM_PREFIX: &str = "p";

/// Parameter name for a 1-based positional index
pub fn param_name(index: usize) -> String {
    format!("{}{}", PARAM_PREFIX, index)
}

/// Placeholder text for a 1-based positional index
pub fn placeholder(index: usize) -> String {
    format!(":{}", param_name(index))
}

/// Backend-agnostic query descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Conditions the clause was compiled from
    pub conditions: Vec<FilterCondition>,
    /// Placeholder name to bound value
    pub parameters: BTreeMap<String, Value>,
    /// Boolean expression template, empty when there are no conditions
    pub sql: String,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Bound values in positional order, for executors binding `$1..$n`
    pub fn ordered_values(&self) -> Vec<&Value> {
        let mut indexed: Vec<(usize, &Value)> = self
            .parameters
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(PARAM_PREFIX)
                    .and_then(|n| n.parse::<usize>().ok())
                    .map(|n| (n, value))
            })
            .collect();
        indexed.sort_by_key(|(n, _)| *n);
        indexed.into_iter().map(|(_, v)| v).collect()
    }

    /// Clause rewritten to `$n` placeholders (PostgreSQL style)
    pub fn to_dollar_sql(&self) -> String {
        let mut sql = self.sql.clone();
        // Highest index first so `:p1` never clobbers `:p10`.
        for index in (1..=self.parameters.len()).rev() {
            sql = sql.replace(&placeholder(index), &format!("${}", index));
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_naming() {
        assert_eq!(param_name(3), "p3");
        assert_eq!(placeholder(3), ":p3");
    }

    #[test]
    fn test_ordered_values_numeric_order() {
        let mut query = FilterQuery::default();
        for i in 1..=11 {
            query
                .parameters
                .insert(param_name(i), Value::Number(i as f64));
        }
        let values: Vec<f64> = query
            .ordered_values()
            .into_iter()
            .filter_map(|v| v.as_f64())
            .collect();
        assert_eq!(values, (1..=11).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_dollar_sql_rewrite() {
        let mut query = FilterQuery::default();
        for i in 1..=10 {
            query.parameters.insert(param_name(i), Value::Null);
        }
        query.sql = "a = :p1 AND b = :p10".to_string();
        assert_eq!(query.to_dollar_sql(), "a = $1 AND b = $10");
    }
}
