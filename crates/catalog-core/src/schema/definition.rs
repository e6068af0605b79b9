//! Filter definition types

use serde::{Deserialize, Serialize};

/// Kind of filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Discrete option set
    Checkbox,
    /// Continuous numeric range
    Slider,
}

/// One selectable option of a checkbox filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Display label
    pub display: String,
    /// Encoded filter token (e.g. `">=1000"`, `"Mono"`)
    pub value: String,
    /// Predicate override used instead of `value` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_condition: Option<String>,
}

impl FilterOption {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: value.into(),
            sql_condition: None,
        }
    }

    /// Attach a predicate override
    pub fn with_sql_condition(mut self, sql: impl Into<String>) -> Self {
        self.sql_condition = Some(sql.into());
        self
    }
}

fn default_tick() -> f64 {
    1.0
}

fn is_default_tick(tick: &f64) -> bool {
    *tick == 1.0
}

/// Describes one filterable attribute of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDefinition {
    /// Display label
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FilterKind,

    /// Backend field key this filter targets
    pub param: String,

    /// Display unit, not semantic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Checkbox options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FilterOption>>,

    /// Slider bounds `[min, max]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,

    /// Slider step
    #[serde(default = "default_tick", skip_serializing_if = "is_default_tick")]
    pub tick: f64,

    /// UI hint only
    #[serde(default)]
    pub default_expanded: bool,
}

impl FilterDefinition {
    /// Create a checkbox filter
    pub fn checkbox(
        name: impl Into<String>,
        param: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FilterKind::Checkbox,
            param: param.into(),
            unit: None,
            options: Some(options),
            range: None,
            tick: default_tick(),
            default_expanded: false,
        }
    }

    /// Create a slider filter
    pub fn slider(name: impl Into<String>, param: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: FilterKind::Slider,
            param: param.into(),
            unit: None,
            options: None,
            range: Some([min, max]),
            tick: default_tick(),
            default_expanded: false,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_tick(mut self, tick: f64) -> Self {
        self.tick = tick;
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    pub fn is_slider(&self) -> bool {
        self.kind == FilterKind::Slider
    }

    /// Checkbox options, empty for sliders
    pub fn options(&self) -> &[FilterOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Find an option by its token value
    pub fn find_option(&self, value: &str) -> Option<&FilterOption> {
        self.options().iter().find(|o| o.value == value)
    }
}

/// One display column of a category listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Backend field key
    pub key: String,
    /// Column header
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Filter schema of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilterConfig {
    /// Logical store identifier
    pub table_name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
}

impl CategoryFilterConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<FilterDefinition>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = columns;
        self
    }

    /// Look up a filter definition by param
    pub fn filter(&self, param: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|f| f.param == param)
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_definition_json_shape() {
        let json = r#"{
            "name": "DPI",
            "type": "checkbox",
            "param": "dpi",
            "options": [
                {"display": "4800 dpi", "value": "4800"},
                {"display": "High", "value": ">=3600", "sqlCondition": ">=3600"}
            ],
            "defaultExpanded": true
        }"#;
        let def: FilterDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.kind, FilterKind::Checkbox);
        assert_eq!(def.options().len(), 2);
        assert_eq!(def.tick, 1.0);
        assert!(def.default_expanded);
        assert_eq!(
            def.find_option(">=3600").and_then(|o| o.sql_condition.as_deref()),
            Some(">=3600")
        );
    }

    #[test]
    fn test_slider_builder() {
        let def = FilterDefinition::slider("Scan Width", "scan_width", 0.0, 2000.0)
            .with_unit("mm")
            .with_tick(10.0);
        assert!(def.is_slider());
        assert_eq!(def.range, Some([0.0, 2000.0]));
        assert!(def.options().is_empty());

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "slider");
        assert_eq!(json["tick"], 10.0);
    }

    #[test]
    fn test_category_config_lookup() {
        let config = CategoryFilterConfig::new("cis_products")
            .with_filters(vec![FilterDefinition::slider("Width", "scan_width", 0.0, 10.0)])
            .with_columns(vec![ColumnDefinition {
                key: "partnumber".to_string(),
                label: "Part Number".to_string(),
                unit: None,
            }]);
        assert!(config.filter("scan_width").is_some());
        assert!(config.filter("dpi").is_none());
        assert!(config.has_column("partnumber"));
    }
}
