//! Listing filter state and its URL query-string form
//!
//! The URL is the source of truth for a listing: the state is rebuilt from
//! the query string on page load and written back after every change.
//!
//! ```text
//! ?category=cis,tdi&search=xcm&sort=dpi&order=desc&page=2
//!  &dpi=4800&dpi=3600&line_rate=100-400
//! ```
//!
//! `category`, `partnumber`, `series`, `search`, `sort`, `order`, `page` and
//! `limit` are reserved; every other key is a filter param.

use crate::error::{Result, SdkError};
use catalog_compiler::ActiveFilter;
use catalog_core::FilterDefinition;
use catalog_parser::{decode_range_token, RangeToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Free-text search keys, in URL order
pub const SEARCH_KEYS: [&str; 3] = ["partnumber", "series", "search"];

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(SdkError::InvalidQuery(format!("unknown sort order '{}'", other))),
        }
    }
}

/// Selected value(s) of one filter param
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ParamValue {
    /// Checkbox option tokens
    Tokens(Vec<String>),
    /// Slider range
    Range(RangeToken),
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Tokens(tokens) => tokens.is_empty(),
            ParamValue::Range(range) => range.is_empty(),
        }
    }
}

/// Filter state of one product listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub categories: Vec<String>,
    pub partnumber: Option<String>,
    pub series: Option<String>,
    pub search: Option<String>,
    /// Param → selection, ordered by param for stable URLs
    pub parameters: BTreeMap<String, ParamValue>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a set of categories
    pub fn for_categories<S: Into<String>>(categories: Vec<S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True when nothing narrows the listing
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.search_terms().next().is_none()
            && self.parameters.values().all(ParamValue::is_empty)
    }

    /// Non-empty free-text terms as `(key, term)`
    pub fn search_terms(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SEARCH_KEYS
            .into_iter()
            .zip([&self.partnumber, &self.series, &self.search])
            .filter_map(|(key, term)| term.as_deref().map(|t| (key, t)))
    }

    /// Set a free-text term; blank clears it
    pub fn set_search_term(&mut self, key: &str, term: &str) -> Result<()> {
        let term = non_blank(term);
        match key {
            "partnumber" => self.partnumber = term,
            "series" => self.series = term,
            "search" => self.search = term,
            other => {
                return Err(SdkError::InvalidQuery(format!(
                    "'{}' is not a search key",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Select or deselect one checkbox token; returns whether it is now selected
    pub fn toggle_token(&mut self, param: &str, token: &str) -> bool {
        let tokens = match self.parameters.get_mut(param) {
            Some(ParamValue::Tokens(tokens)) => tokens,
            _ => {
                self.parameters
                    .insert(param.to_string(), ParamValue::Tokens(vec![token.to_string()]));
                return true;
            }
        };

        if let Some(pos) = tokens.iter().position(|t| t == token) {
            tokens.remove(pos);
            if tokens.is_empty() {
                self.parameters.remove(param);
            }
            false
        } else {
            tokens.push(token.to_string());
            true
        }
    }

    /// Set a slider range; an empty range clears the param
    pub fn set_range(&mut self, param: &str, range: RangeToken) {
        if range.is_empty() {
            self.parameters.remove(param);
        } else {
            self.parameters
                .insert(param.to_string(), ParamValue::Range(range));
        }
    }

    pub fn clear_param(&mut self, param: &str) -> bool {
        self.parameters.remove(param).is_some()
    }

    /// Parse a query string, guessing slider params from their value shape
    pub fn from_query_string(qs: &str) -> Result<Self> {
        Self::from_query_string_with(qs, |_| Vec::new())
    }

    /// Parse a query string, using the definitions of the parsed categories
    ///
    /// `definitions` receives the categories from the URL and returns the
    /// filter definitions that apply to them. A param with a slider
    /// definition is read as a range token; a param without a definition is
    /// read as a range only when its value has numeric sides around a `-`.
    pub fn from_query_string_with<F>(qs: &str, definitions: F) -> Result<Self>
    where
        F: FnOnce(&[String]) -> Vec<FilterDefinition>,
    {
        let mut state = FilterState::default();
        let mut raw_params = Vec::new();

        for RawPair { key, value, joined } in decode_pairs(qs)? {
            match key.as_str() {
                "category" => {
                    for category in value.split(',').map(str::trim) {
                        if !category.is_empty() && !state.categories.iter().any(|c| c == category)
                        {
                            state.categories.push(category.to_string());
                        }
                    }
                }
                "partnumber" | "series" | "search" => state.set_search_term(&key, &value)?,
                "sort" => state.sort = non_blank(&value),
                "order" => match value.parse::<SortOrder>() {
                    Ok(order) => state.order = Some(order),
                    Err(err) => tracing::warn!("Ignoring order: {}", err),
                },
                "page" => state.page = positive(&key, &value),
                "limit" => state.limit = positive(&key, &value),
                _ if value.trim().is_empty() => {}
                _ => raw_params.push((key, value, joined)),
            }
        }

        let definitions = definitions(&state.categories);
        for (param, raw, joined) in raw_params {
            let definition = definitions.iter().find(|d| d.param == param);
            let Some(incoming) = interpret(definition, &raw, joined) else {
                continue;
            };

            match (state.parameters.get_mut(&param), incoming) {
                (Some(ParamValue::Tokens(existing)), ParamValue::Tokens(tokens)) => {
                    for token in tokens {
                        if !existing.contains(&token) {
                            existing.push(token);
                        }
                    }
                }
                (_, incoming) => {
                    state.parameters.insert(param, incoming);
                }
            }
        }

        Ok(state)
    }

    /// Serialize to a query string
    ///
    /// Reserved keys come first in a fixed order, then params sorted by key.
    /// Checkbox tokens are written as repeated keys with commas encoded, so
    /// a token that contains a comma reads back whole; empty selections are
    /// omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if !self.categories.is_empty() {
            pairs.push(("category", self.categories.join(",")));
        }
        for (key, term) in self.search_terms() {
            pairs.push((key, term.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }

        for (param, value) in &self.parameters {
            match value {
                ParamValue::Tokens(tokens) => {
                    pairs.extend(tokens.iter().map(|t| (param.as_str(), t.clone())));
                }
                ParamValue::Range(range) if !range.is_empty() => {
                    pairs.push((param.as_str(), range.encode()));
                }
                ParamValue::Range(_) => {}
            }
        }

        pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Active filter selections for the compiler
    ///
    /// Checkbox selections carry their definition's options, so a token whose
    /// option has a `sql_condition` compiles from that condition instead.
    pub fn active_filters(&self, definitions: &[FilterDefinition]) -> Vec<ActiveFilter> {
        self.parameters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(param, value)| {
                let definition = definitions.iter().find(|d| &d.param == param);
                match value {
                    ParamValue::Tokens(tokens) => {
                        let options = definition
                            .map(|d| {
                                d.options()
                                    .iter()
                                    .filter(|o| o.sql_condition.is_some())
                                    .cloned()
                                    .collect()
                            })
                            .unwrap_or_default();
                        ActiveFilter::checkbox_with_options(
                            param.as_str(),
                            options,
                            tokens.clone(),
                        )
                    }
                    ParamValue::Range(range) => ActiveFilter::slider(param.as_str(), *range),
                }
            })
            .collect()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Read one raw param value
///
/// Only a value typed with a literal comma is a token list; an encoded
/// `%2C` stays inside its token.
fn interpret(
    definition: Option<&FilterDefinition>,
    raw: &str,
    joined: bool,
) -> Option<ParamValue> {
    let raw = raw.trim();
    let tokens = || {
        if joined {
            split_tokens(raw)
        } else {
            vec![raw.to_string()]
        }
    };
    let value = match definition {
        Some(def) if def.is_slider() => ParamValue::Range(decode_range_token(raw)),
        Some(def) if def.find_option(raw).is_some() => ParamValue::Tokens(vec![raw.to_string()]),
        Some(_) => ParamValue::Tokens(tokens()),
        None => match looks_like_range(raw) {
            Some(range) => ParamValue::Range(range),
            None => ParamValue::Tokens(tokens()),
        },
    };
    (!value.is_empty()).then_some(value)
}

fn looks_like_range(raw: &str) -> Option<RangeToken> {
    if !raw.contains('-') {
        return None;
    }
    raw.parse::<RangeToken>().ok().filter(|r| !r.is_empty())
}

/// Split a comma-joined token list, keeping commas inside brackets and quotes
pub(crate) fn split_tokens(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                tokens.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    tokens.push(current);

    tokens
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// One decoded `key=value` pair
struct RawPair {
    key: String,
    value: String,
    /// The undecoded value had a literal `,`
    joined: bool,
}

fn decode_pairs(qs: &str) -> Result<Vec<RawPair>> {
    let qs = qs.trim().trim_start_matches('?');
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<RawPair> {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok(RawPair {
                key: decode_component(key)?,
                value: decode_component(value)?,
                joined: value.contains(','),
            })
        })
        .filter(|pair| !matches!(pair, Ok(RawPair { key, .. }) if key.is_empty()))
        .collect()
}

fn decode_component(s: &str) -> Result<String> {
    let s = s.replace('+', " ");
    urlencoding::decode(&s)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| SdkError::InvalidQuery(format!("bad percent-encoding in '{}': {}", s, e)))
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn positive(key: &str, value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => {
            tracing::warn!("Ignoring {}={:?}", key, value);
            None
        }
    }
}
