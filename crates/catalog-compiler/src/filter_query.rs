//! Active filter selections to a compiled query

use crate::builders::{
    build_advanced_filter_conditions, build_checkbox_filter, build_option_checkbox_filter,
    build_range_filter,
};
use crate::where_clause::{build_grouped_where_clause, build_where_clause};
use catalog_core::{FilterCondition, FilterOption, FilterQuery};
use catalog_parser::RangeToken;
use serde::{Deserialize, Serialize};

/// What the user picked on one filter widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterSelection {
    /// Selected option tokens, with the widget's options when they carry overrides
    Checkbox {
        selected: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<FilterOption>,
    },
    /// Slider range, either side may be open
    Slider { range: RangeToken },
    /// Selected option values resolved through `sql_condition` overrides
    Select {
        options: Vec<FilterOption>,
        selected: Vec<String>,
    },
}

/// One filter param with its current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilter {
    /// Backend field / URL key
    pub param: String,
    pub selection: FilterSelection,
}

impl ActiveFilter {
    pub fn checkbox<S: Into<String>>(param: impl Into<String>, selected: Vec<S>) -> Self {
        Self {
            param: param.into(),
            selection: FilterSelection::Checkbox {
                selected: selected.into_iter().map(Into::into).collect(),
                options: Vec::new(),
            },
        }
    }

    /// Checkbox whose options may replace a token with their `sql_condition`
    pub fn checkbox_with_options<S: Into<String>>(
        param: impl Into<String>,
        options: Vec<FilterOption>,
        selected: Vec<S>,
    ) -> Self {
        Self {
            param: param.into(),
            selection: FilterSelection::Checkbox {
                selected: selected.into_iter().map(Into::into).collect(),
                options,
            },
        }
    }

    pub fn slider(param: impl Into<String>, range: RangeToken) -> Self {
        Self {
            param: param.into(),
            selection: FilterSelection::Slider { range },
        }
    }

    pub fn select<S: Into<String>>(
        param: impl Into<String>,
        options: Vec<FilterOption>,
        selected: Vec<S>,
    ) -> Self {
        Self {
            param: param.into(),
            selection: FilterSelection::Select {
                options,
                selected: selected.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// True when the selection contributes no condition
    pub fn is_empty(&self) -> bool {
        match &self.selection {
            FilterSelection::Checkbox { selected, .. } => selected.is_empty(),
            FilterSelection::Slider { range } => range.is_empty(),
            FilterSelection::Select { selected, .. } => selected.is_empty(),
        }
    }

    /// Dispatch to the builder matching the widget kind
    pub fn conditions(&self) -> Vec<FilterCondition> {
        let field = self.param.as_str();
        match &self.selection {
            FilterSelection::Checkbox { selected, options } if options.is_empty() => {
                build_checkbox_filter(field, selected)
            }
            FilterSelection::Checkbox { selected, options } => {
                build_option_checkbox_filter(field, options, selected)
            }
            FilterSelection::Slider { range } => build_range_filter(field, range),
            FilterSelection::Select { options, selected } => {
                build_advanced_filter_conditions(field, options, selected)
            }
        }
    }
}

/// Concatenate every active filter's conditions into one AND-joined query
pub fn build_filter_query(filters: &[ActiveFilter]) -> FilterQuery {
    let conditions: Vec<FilterCondition> = filters
        .iter()
        .filter(|f| !f.is_empty())
        .flat_map(ActiveFilter::conditions)
        .collect();
    build_where_clause(&conditions)
}

/// Like [`build_filter_query`], but OR-ing conditions of the same param
pub fn build_grouped_filter_query(filters: &[ActiveFilter]) -> FilterQuery {
    let groups: Vec<Vec<FilterCondition>> = filters
        .iter()
        .filter(|f| !f.is_empty())
        .map(ActiveFilter::conditions)
        .collect();
    build_grouped_where_clause(&groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selections_are_skipped() {
        let filters = vec![
            ActiveFilter::checkbox("dpi", Vec::<String>::new()),
            ActiveFilter::slider("scan_width", RangeToken::default()),
            ActiveFilter::checkbox("color", vec!["Mono"]),
        ];
        let query = build_filter_query(&filters);
        assert_eq!(query.sql, "color = :p1");
    }

    #[test]
    fn test_flat_query_is_and_joined() {
        let filters = vec![
            ActiveFilter::checkbox("dpi", vec!["4800", "3600"]),
            ActiveFilter::slider("scan_width", RangeToken::closed(100.0, 499.0)),
        ];
        let query = build_filter_query(&filters);
        assert_eq!(
            query.sql,
            "dpi = :p1 AND dpi = :p2 AND scan_width BETWEEN :p3 AND :p4"
        );
    }

    #[test]
    fn test_selection_serde_shape() {
        let filter = ActiveFilter::checkbox("dpi", vec!["4800"]);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "param": "dpi",
                "selection": {"type": "checkbox", "selected": ["4800"]}
            })
        );
    }

    #[test]
    fn test_checkbox_options_apply_overrides_per_token() {
        let options = vec![
            FilterOption::new("High", "high").with_sql_condition("dpi >= 3600"),
            FilterOption::new("600 dpi", "600"),
        ];
        let filter = ActiveFilter::checkbox_with_options("dpi", options, vec!["high", "600"]);
        let query = build_grouped_filter_query(&[filter]);
        assert_eq!(query.sql, "((dpi >= 3600) OR dpi = :p1)");
        assert_eq!(query.parameters["p1"], catalog_core::Value::Number(600.0));
    }
}
