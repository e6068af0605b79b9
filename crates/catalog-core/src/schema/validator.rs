//! Filter schema validation

use super::definition::{CategoryFilterConfig, FilterDefinition, FilterKind};
use crate::error::CoreError;
use std::collections::HashSet;

/// Validator for category filter schemas
pub struct SchemaValidator {
    /// Whether two filters may target the same param
    allow_duplicate_params: bool,
}

impl SchemaValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            allow_duplicate_params: false,
        }
    }

    /// Allow duplicate params within one filter list
    pub fn allow_duplicate_params(mut self, allow: bool) -> Self {
        self.allow_duplicate_params = allow;
        self
    }

    /// Validate a category config, collecting every violation
    pub fn validate(
        &self,
        category: &str,
        config: &CategoryFilterConfig,
    ) -> Result<(), Vec<CoreError>> {
        self.validate_filters(category, &config.filters)
    }

    /// Validate a filter list, collecting every violation
    pub fn validate_filters(
        &self,
        category: &str,
        filters: &[FilterDefinition],
    ) -> Result<(), Vec<CoreError>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for filter in filters {
            if let Err(err) = self.validate_filter(filter) {
                errors.push(err);
            }

            if !seen.insert(filter.param.as_str()) && !self.allow_duplicate_params {
                errors.push(CoreError::DuplicateParam {
                    category: category.to_string(),
                    param: filter.param.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a single filter: exactly one of options/range, matching its kind
    pub fn validate_filter(&self, filter: &FilterDefinition) -> Result<(), CoreError> {
        let invalid = |message: &str| CoreError::InvalidFilter {
            param: filter.param.clone(),
            message: message.to_string(),
        };

        if filter.param.trim().is_empty() {
            return Err(invalid("param must not be empty"));
        }

        match filter.kind {
            FilterKind::Checkbox => {
                if filter.range.is_some() {
                    return Err(invalid("checkbox filter must not define a range"));
                }
                match &filter.options {
                    Some(options) if !options.is_empty() => {}
                    _ => return Err(invalid("checkbox filter requires options")),
                }
            }
            FilterKind::Slider => {
                if filter.options.is_some() {
                    return Err(invalid("slider filter must not define options"));
                }
                match filter.range {
                    Some([min, max]) if min <= max => {}
                    Some(_) => return Err(invalid("slider range min exceeds max")),
                    None => return Err(invalid("slider filter requires a range")),
                }
                if filter.tick <= 0.0 {
                    return Err(invalid("slider tick must be positive"));
                }
            }
        }

        Ok(())
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::definition::FilterOption;

    fn dpi_filter() -> FilterDefinition {
        FilterDefinition::checkbox("DPI", "dpi", vec![FilterOption::new("4800", "4800")])
    }

    #[test]
    fn test_valid_config() {
        let config = CategoryFilterConfig::new("cis").with_filters(vec![
            dpi_filter(),
            FilterDefinition::slider("Scan Width", "scan_width", 0.0, 2000.0),
        ]);
        assert!(SchemaValidator::new().validate("cis", &config).is_ok());
    }

    #[test]
    fn test_checkbox_without_options() {
        let mut filter = dpi_filter();
        filter.options = Some(vec![]);
        let err = SchemaValidator::new().validate_filter(&filter).unwrap_err();
        assert!(err.to_string().contains("requires options"));
    }

    #[test]
    fn test_slider_with_options() {
        let mut filter = FilterDefinition::slider("Width", "scan_width", 0.0, 1.0);
        filter.options = Some(vec![FilterOption::new("x", "x")]);
        assert!(SchemaValidator::new().validate_filter(&filter).is_err());
    }

    #[test]
    fn test_slider_inverted_range() {
        let filter = FilterDefinition::slider("Width", "scan_width", 10.0, 1.0);
        let err = SchemaValidator::new().validate_filter(&filter).unwrap_err();
        assert!(err.to_string().contains("min exceeds max"));
    }

    #[test]
    fn test_duplicate_params_collected() {
        let filters = vec![dpi_filter(), dpi_filter()];
        let errors = SchemaValidator::new()
            .validate_filters("cis", &filters)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CoreError::DuplicateParam { .. }));

        assert!(SchemaValidator::new()
            .allow_duplicate_params(true)
            .validate_filters("cis", &filters)
            .is_ok());
    }
}
