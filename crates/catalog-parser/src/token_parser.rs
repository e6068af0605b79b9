//! Filter token parser
//!
//! Parses encoded filter tokens like:
//! - `[100,499]`
//! - `BETWEEN 500 AND 999`
//! - `NOT IN ('A','B')`
//! - `>=1000`
//! - `>=8 AND p_item4<=16`
//! - `4800`, `Mono`
//!
//! Parsing never fails: anything unrecognised becomes an `eq` match on the
//! trimmed literal.

use catalog_core::{FilterCondition, FilterOperator, Value};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const NUMBER: &str = r"-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)";

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\[\s*({NUMBER})\s*,\s*({NUMBER})\s*\]$"))
        .expect("valid bracketed range regex")
});
static BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^BETWEEN\s+({NUMBER})\s+AND\s+({NUMBER})$"))
        .expect("valid between regex")
});
static NOT_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^NOT\s+IN\s*\((.*)\)$").expect("valid not-in regex"));
static INEQUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(>=|<=|>|<)\s*({NUMBER})$")).expect("valid inequality regex")
});
static COMPOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(.+?)\s+AND\s+(.+)$").expect("valid compound regex"));
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NUMBER}$")).expect("valid numeric regex"));

/// Which grammar rule a token matched, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenForm {
    /// `[min,max]`
    Bracketed,
    /// `BETWEEN a AND b`
    Between,
    /// `NOT IN (...)`
    NotIn,
    /// `>=N`, `<=N`, `>N`, `<N`
    Inequality,
    /// `<pred> AND <pred with placeholder field>`
    PlaceholderCompound,
    /// Bare number
    Numeric,
    /// Anything else
    Literal,
}

/// Parser for encoded filter tokens
#[derive(Debug, Clone)]
pub struct FilterTokenParser {
    /// Legacy placeholder field pattern (`p_itemN`)
    placeholder: Regex,
}

impl Default for FilterTokenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterTokenParser {
    /// Create a parser recognising the `p_itemN` placeholder convention
    pub fn new() -> Self {
        Self::with_placeholder_prefix("p_item")
    }

    /// Create a parser with a different placeholder prefix (`<prefix>N`)
    pub fn with_placeholder_prefix(prefix: &str) -> Self {
        let pattern = format!(r"\b{}[0-9]+\b", regex::escape(prefix));
        Self {
            placeholder: Regex::new(&pattern).expect("escaped placeholder prefix is a valid regex"),
        }
    }

    /// Classify a token without building a condition
    pub fn classify(&self, token: &str) -> TokenForm {
        let token = token.trim();

        if BRACKETED.is_match(token) {
            TokenForm::Bracketed
        } else if BETWEEN.is_match(token) {
            TokenForm::Between
        } else if NOT_IN.is_match(token) {
            TokenForm::NotIn
        } else if INEQUALITY.is_match(token) {
            TokenForm::Inequality
        } else if self.placeholder_compound(token).is_some() {
            TokenForm::PlaceholderCompound
        } else if NUMERIC.is_match(token) {
            TokenForm::Numeric
        } else {
            TokenForm::Literal
        }
    }

    /// Parse one token into a condition on `field`
    ///
    /// A placeholder compound such as `>=8 AND p_item4<=16` becomes `custom`
    /// with every `p_itemN` replaced by `field`. When the token starts with a
    /// bare comparison the field is also prefixed, so the stored text is
    /// `f>=8 AND f<=16` rather than the literal `>=8 AND f<=16`.
    pub fn parse(&self, field: &str, token: &str) -> FilterCondition {
        let token = token.trim();
        let form = self.classify(token);
        let condition = self
            .build(form, field, token)
            .unwrap_or_else(|| FilterCondition::eq(field, token));

        tracing::debug!(
            "Parsed token '{}' on '{}' as {:?} ({})",
            token,
            field,
            form,
            condition.operator
        );
        condition
    }

    /// Parse an option's `sqlCondition` override
    ///
    /// Overrides written in the token grammar parse as tokens. Anything the
    /// grammar would only match as a literal is raw predicate text and
    /// becomes `custom`, so it stays subject to the compiler's custom SQL
    /// policy.
    pub fn parse_sql_condition(&self, field: &str, sql: &str) -> FilterCondition {
        let sql = sql.trim();
        match self.classify(sql) {
            TokenForm::Literal => {
                tracing::debug!("Override '{}' on '{}' kept as raw predicate", sql, field);
                FilterCondition::custom(field, self.relativize(field, sql))
            }
            form => self
                .build(form, field, sql)
                .unwrap_or_else(|| FilterCondition::eq(field, sql)),
        }
    }

    /// Condition for a token already classified as `form`
    fn build(&self, form: TokenForm, field: &str, token: &str) -> Option<FilterCondition> {
        match form {
            TokenForm::Bracketed => BRACKETED
                .captures(token)
                .map(|caps| FilterCondition::between(field, number(&caps[1]), number(&caps[2]))),
            TokenForm::Between => BETWEEN
                .captures(token)
                .map(|caps| FilterCondition::between(field, number(&caps[1]), number(&caps[2]))),
            TokenForm::NotIn => NOT_IN
                .captures(token)
                .map(|caps| FilterCondition::not_in(field, split_list(&caps[1]))),
            TokenForm::Inequality => INEQUALITY.captures(token).map(|caps| {
                let operator = match &caps[1] {
                    ">=" => FilterOperator::Gte,
                    "<=" => FilterOperator::Lte,
                    ">" => FilterOperator::Gt,
                    _ => FilterOperator::Lt,
                };
                FilterCondition::new(field, operator, Value::Number(number(&caps[2])))
            }),
            TokenForm::PlaceholderCompound => self
                .placeholder_compound(token)
                .map(|sql| FilterCondition::custom(field, self.relativize(field, &sql))),
            TokenForm::Numeric => Some(FilterCondition::eq(field, number(token))),
            TokenForm::Literal => Some(FilterCondition::eq(field, token)),
        }
    }

    /// Text of a compound token whose second predicate names a placeholder field
    fn placeholder_compound(&self, token: &str) -> Option<String> {
        let caps = COMPOUND.captures(token)?;
        if self.placeholder.is_match(&caps[2]) {
            Some(token.to_string())
        } else {
            None
        }
    }

    /// Give the leading bare predicate the implicit field and replace placeholders
    pub(crate) fn relativize(&self, field: &str, sql: &str) -> String {
        let sql = if starts_with_comparison(sql) {
            format!("{}{}", field, sql)
        } else {
            sql.to_string()
        };
        self.placeholder.replace_all(&sql, field).into_owned()
    }
}

static DEFAULT_PARSER: LazyLock<FilterTokenParser> = LazyLock::new(FilterTokenParser::new);

/// Parse a filter token with the default parser
pub fn parse_filter_value(field: &str, token: &str) -> FilterCondition {
    DEFAULT_PARSER.parse(field, token)
}

/// Parse a `sqlCondition` override with the default parser
pub fn parse_sql_condition(field: &str, sql: &str) -> FilterCondition {
    DEFAULT_PARSER.parse_sql_condition(field, sql)
}

fn starts_with_comparison(s: &str) -> bool {
    s.starts_with(['<', '>', '=', '!'])
}

// Only called on text matched by NUMBER, so the parse cannot fail.
fn number(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

/// Split a `NOT IN` body into trimmed, quote-stripped items
pub(crate) fn split_list(body: &str) -> Vec<String> {
    body.split(',')
        .map(|item| {
            let item = item.trim();
            let item = item.strip_prefix(['\'', '"']).unwrap_or(item);
            let item = item.strip_suffix(['\'', '"']).unwrap_or(item);
            item.trim().to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}
