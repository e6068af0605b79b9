//! Key normalisation strategies
//!
//! The current registry is keyed by lowercase slugs (`cis`, `linescan`),
//! the legacy one by product type (`camera`) plus numeric subcategory codes
//! (`1012`). Both sit behind [`SchemaRegistry`](crate::SchemaRegistry); the
//! strategy only decides how lookup keys are normalised.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    /// `"Line Scan"`, `"line_scan"` and `"LINESCAN"` all resolve to `linescan`
    Slug,
    /// Product type compared case-insensitively, codes compared as digits
    LegacyCode,
}

impl KeyStrategy {
    /// Normalise a category / product-type key
    pub fn normalize_key(&self, key: &str) -> String {
        match self {
            KeyStrategy::Slug => key
                .trim()
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
                .flat_map(char::to_lowercase)
                .collect(),
            KeyStrategy::LegacyCode => key.trim().to_lowercase(),
        }
    }

    /// Normalise a subcategory code
    pub fn normalize_code(&self, code: &str) -> String {
        match self {
            KeyStrategy::Slug => self.normalize_key(code),
            KeyStrategy::LegacyCode => {
                let code = code.trim();
                let stripped = code.trim_start_matches('0');
                if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
                    code.to_string()
                } else {
                    stripped.to_string()
                }
            }
        }
    }
}

/// Display names compare case-insensitively with collapsed whitespace
pub(crate) fn normalize_alias(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
