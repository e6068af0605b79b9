//! WHERE clause emission
//!
//! Every non-custom condition is bound as a parameter. Placeholder indices
//! are allocated globally across the whole input, in input order, so two
//! `between` conditions in a row consume `:p1..:p4`.
//!
//! | operator            | emitted text                      | parameters |
//! |---------------------|-----------------------------------|------------|
//! | eq ne gt gte lt lte | `f >= :p1`                        | 1          |
//! | between             | `f BETWEEN :p1 AND :p2`           | 2          |
//! | in / not_in         | `f IN (:p1, :p2)`                 | one each   |
//! | like                | `LOWER(f) LIKE LOWER(:p1)`        | `%value%`  |
//! | custom              | `(raw text)`                      | 0          |

use catalog_core::query::{param_name, placeholder};
use catalog_core::{FilterCondition, FilterOperator, FilterQuery, Value};
use std::collections::BTreeMap;

/// Accumulates bound parameters while clause fragments are emitted
#[derive(Debug)]
pub(crate) struct ClauseWriter {
    parameters: BTreeMap<String, Value>,
    next_index: usize,
}

impl ClauseWriter {
    pub(crate) fn new() -> Self {
        Self {
            parameters: BTreeMap::new(),
            next_index: 1,
        }
    }

    fn bind(&mut self, value: Value) -> String {
        let index = self.next_index;
        self.next_index += 1;
        self.parameters.insert(param_name(index), value);
        placeholder(index)
    }

    /// Emit the clause fragment for one condition
    pub(crate) fn emit(&mut self, condition: &FilterCondition) -> String {
        let field = &condition.field;

        match condition.operator {
            FilterOperator::Between => match condition.range_bounds() {
                Some((min, max)) => {
                    let lo = self.bind(Value::Number(min));
                    let hi = self.bind(Value::Number(max));
                    format!("{} BETWEEN {} AND {}", field, lo, hi)
                }
                None => {
                    tracing::warn!(
                        "between on '{}' has no numeric bounds ({}), compiling as eq",
                        field,
                        condition.value.type_name()
                    );
                    let p = self.bind(condition.value.clone());
                    format!("{} = {}", field, p)
                }
            },
            FilterOperator::In | FilterOperator::NotIn => {
                let keyword = if condition.operator == FilterOperator::In {
                    "IN"
                } else {
                    "NOT IN"
                };
                let items = match &condition.value {
                    Value::Array(items) => items.clone(),
                    Value::Null => Vec::new(),
                    other => vec![other.clone()],
                };
                let placeholders: Vec<String> =
                    items.into_iter().map(|item| self.bind(item)).collect();
                format!("{} {} ({})", field, keyword, placeholders.join(", "))
            }
            FilterOperator::Like => {
                let p = self.bind(Value::String(format!("%{}%", condition.value)));
                format!("LOWER({}) LIKE LOWER({})", field, p)
            }
            FilterOperator::Custom => {
                let sql = condition
                    .custom_sql
                    .clone()
                    .unwrap_or_else(|| condition.value.to_string());
                format!("({})", sql)
            }
            op => {
                let symbol = op.sql_symbol().unwrap_or("=");
                let p = self.bind(condition.value.clone());
                format!("{} {} {}", field, symbol, p)
            }
        }
    }

    pub(crate) fn finish(self, conditions: Vec<FilterCondition>, sql: String) -> FilterQuery {
        FilterQuery {
            conditions,
            parameters: self.parameters,
            sql,
        }
    }
}

/// Compile conditions into one AND-joined clause
pub fn build_where_clause(conditions: &[FilterCondition]) -> FilterQuery {
    let mut writer = ClauseWriter::new();
    let parts: Vec<String> = conditions.iter().map(|c| writer.emit(c)).collect();
    let query = writer.finish(conditions.to_vec(), parts.join(" AND "));

    tracing::debug!(
        "Compiled {} conditions into {} parameters",
        query.conditions.len(),
        query.parameters.len()
    );
    query
}

/// Compile groups of conditions: OR within a group, AND across groups
///
/// A group with more than one condition is parenthesised. Empty groups are
/// skipped. Parameter numbering runs across all groups.
pub fn build_grouped_where_clause(groups: &[Vec<FilterCondition>]) -> FilterQuery {
    let mut writer = ClauseWriter::new();
    let mut conditions = Vec::new();
    let mut parts = Vec::new();

    for group in groups.iter().filter(|g| !g.is_empty()) {
        let fragments: Vec<String> = group.iter().map(|c| writer.emit(c)).collect();
        if fragments.len() == 1 {
            parts.extend(fragments);
        } else {
            parts.push(format!("({})", fragments.join(" OR ")));
        }
        conditions.extend(group.iter().cloned());
    }

    writer.finish(conditions, parts.join(" AND "))
}
