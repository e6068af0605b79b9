//! Main compiler
//!
//! Wraps the free clause builders with the options a deployment can tune.

use crate::error::{CompileError, Result};
use crate::filter_query::ActiveFilter;
use crate::where_clause::{build_grouped_where_clause, build_where_clause};
use catalog_core::{FilterCondition, FilterOperator, FilterQuery};
use catalog_parser::safety::matched_pattern;
use serde::{Deserialize, Serialize};

/// What to do with `custom` conditions whose text hits the deny-list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomSqlPolicy {
    /// Emit as-is
    #[default]
    Allow,
    /// Log and leave the condition out
    Drop,
    /// Fail compilation
    Reject,
}

/// Compiler options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Screening of `custom` predicate text
    pub custom_sql_policy: CustomSqlPolicy,
    /// OR conditions of the same param, AND across params
    pub group_by_param: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            custom_sql_policy: CustomSqlPolicy::Allow,
            group_by_param: true,
        }
    }
}

/// Filter compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile a flat condition list (AND-joined)
    pub fn compile(&self, conditions: &[FilterCondition]) -> Result<FilterQuery> {
        let conditions = self.screen(conditions.to_vec())?;
        Ok(build_where_clause(&conditions))
    }

    /// Compile condition groups (OR within, AND across)
    pub fn compile_grouped(&self, groups: &[Vec<FilterCondition>]) -> Result<FilterQuery> {
        let groups = groups
            .iter()
            .map(|group| self.screen(group.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(build_grouped_where_clause(&groups))
    }

    /// Compile active filter selections
    pub fn compile_filters(&self, filters: &[ActiveFilter]) -> Result<FilterQuery> {
        let groups: Vec<Vec<FilterCondition>> = filters
            .iter()
            .filter(|f| !f.is_empty())
            .map(ActiveFilter::conditions)
            .collect();

        if self.options.group_by_param {
            self.compile_grouped(&groups)
        } else {
            let flat: Vec<FilterCondition> = groups.into_iter().flatten().collect();
            self.compile(&flat)
        }
    }

    fn screen(&self, conditions: Vec<FilterCondition>) -> Result<Vec<FilterCondition>> {
        if self.options.custom_sql_policy == CustomSqlPolicy::Allow {
            return Ok(conditions);
        }

        let mut kept = Vec::with_capacity(conditions.len());
        for condition in conditions {
            let hit = if condition.operator == FilterOperator::Custom {
                let text = condition
                    .custom_sql
                    .clone()
                    .unwrap_or_else(|| condition.value.to_string());
                matched_pattern(&text)
            } else {
                None
            };

            match (hit, self.options.custom_sql_policy) {
                (None, _) => kept.push(condition),
                (Some(pattern), CustomSqlPolicy::Reject) => {
                    return Err(CompileError::UnsafeCustomSql {
                        field: condition.field,
                        pattern: pattern.to_string(),
                    });
                }
                (Some(pattern), _) => {
                    tracing::warn!(
                        "Dropping custom condition on '{}' (matched {})",
                        condition.field,
                        pattern
                    );
                }
            }
        }
        Ok(kept)
    }
}
