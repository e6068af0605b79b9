//! Advisory screen for raw predicate text
//!
//! `custom` conditions and `sqlCondition` overrides carry author-written text
//! from the schema registry. This deny-list flags obviously dangerous shapes;
//! it is pattern matching, not a sanitizer, and every non-custom condition
//! must still be bound as a parameter by the executor.

use regex::Regex;
use std::sync::LazyLock;

static DENY_LIST: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("drop", r"(?i)\bDROP\b"),
        ("delete", r"(?i)\bDELETE\b"),
        ("union select", r"(?i)\bUNION\s+(?:ALL\s+)?SELECT\b"),
        ("script tag", r"(?i)<\s*script"),
        ("javascript uri", r"(?i)javascript\s*:"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid deny-list regex")))
    .collect()
});

/// Name of the first deny-list pattern the value matches
pub fn matched_pattern(value: &str) -> Option<&'static str> {
    DENY_LIST
        .iter()
        .find(|(_, re)| re.is_match(value))
        .map(|(name, _)| *name)
}

/// Returns false when the value matches a deny-list pattern
pub fn validate_filter_value(value: &str) -> bool {
    match matched_pattern(value) {
        Some(name) => {
            tracing::warn!("Filter value rejected by deny-list ({}): {}", name, value);
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_catalog_tokens() {
        for token in ["4800", ">=1000", "[100,499]", "NOT IN ('A','B')", "Mono", "Dropout compensation"] {
            assert!(validate_filter_value(token), "token {}", token);
        }
    }

    #[test]
    fn test_rejects_dangerous_shapes() {
        assert!(!validate_filter_value("1; DROP TABLE products"));
        assert!(!validate_filter_value("x' OR 1=1; delete from t"));
        assert!(!validate_filter_value("1 UNION SELECT password FROM users"));
        assert!(!validate_filter_value("1 union all select 1"));
        assert!(!validate_filter_value("<script>alert(1)</script>"));
        assert!(!validate_filter_value("JavaScript:alert(1)"));
    }

    #[test]
    fn test_matched_pattern_name() {
        assert_eq!(matched_pattern("DROP TABLE x"), Some("drop"));
        assert_eq!(matched_pattern("fine"), None);
    }
}
