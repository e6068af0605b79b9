//! Legacy inline predicate rendering
//!
//! The legacy listing pages built their WHERE text inline, pasting literals
//! straight into the predicate. Two paths produce that text:
//! - [`legacy_inline_predicate`]: the old direct token-to-text path
//! - [`render_inline`]: a structured [`FilterCondition`] rendered the same way
//!
//! Both must agree for every token of the grammar; the text is only meant for
//! display, diagnostics and comparison, never for execution.

use catalog_core::{FilterCondition, FilterOperator, Value};

const PLACEHOLDER_PREFIX: &str = "p_item";

/// Render a token as inline predicate text the way the legacy pages did
pub fn legacy_inline_predicate(field: &str, token: &str) -> String {
    let t = token.trim();
    let upper = t.to_ascii_uppercase();

    // [min,max]
    if let Some(inner) = t.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if let [min, max] = parts.as_slice() {
            if let (Some(min), Some(max)) = (legacy_number(min), legacy_number(max)) {
                return format!("{} BETWEEN {} AND {}", field, min, max);
            }
        }
    }

    // BETWEEN a AND b
    let words: Vec<&str> = t.split_whitespace().collect();
    if let [kw, min, and, max] = words.as_slice() {
        if kw.eq_ignore_ascii_case("BETWEEN") && and.eq_ignore_ascii_case("AND") {
            if let (Some(min), Some(max)) = (legacy_number(min), legacy_number(max)) {
                return format!("{} BETWEEN {} AND {}", field, min, max);
            }
        }
    }

    // NOT IN (...)
    if upper.starts_with("NOT") && t[3..].starts_with(char::is_whitespace) {
        let rest = t[3..].trim_start();
        if rest.get(..2).is_some_and(|kw| kw.eq_ignore_ascii_case("IN")) {
            let rest = rest[2..].trim_start();
            if let Some(body) = rest.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
                let items: Vec<String> = body
                    .split(',')
                    .map(|item| {
                        let item = item.trim();
                        let item = item.strip_prefix(['\'', '"']).unwrap_or(item);
                        let item = item.strip_suffix(['\'', '"']).unwrap_or(item);
                        item.trim()
                    })
                    .filter(|item| !item.is_empty())
                    .map(quote)
                    .collect();
                return format!("{} NOT IN ({})", field, items.join(", "));
            }
        }
    }

    // >=N <=N >N <N
    for op in [">=", "<=", ">", "<"] {
        if let Some(rest) = t.strip_prefix(op) {
            if let Some(n) = legacy_number(rest) {
                return format!("{} {} {}", field, op, n);
            }
            break;
        }
    }

    // <pred> AND <pred naming p_itemN>
    if let Some(second) = compound_tail(t) {
        if has_placeholder(second) {
            let mut sql = t.to_string();
            if sql.starts_with(['<', '>', '=', '!']) {
                sql = format!("{}{}", field, sql);
            }
            return format!("({})", replace_placeholders(&sql, field));
        }
    }

    if let Some(n) = legacy_number(t) {
        return format!("{} = {}", field, n);
    }

    format!("{} = {}", field, quote(t))
}

/// Render a structured condition as inline predicate text
pub fn render_inline(condition: &FilterCondition) -> String {
    let field = &condition.field;
    match condition.operator {
        FilterOperator::Between => match condition.range_bounds() {
            Some((min, max)) => format!("{} BETWEEN {} AND {}", field, min, max),
            None => format!("{} BETWEEN {}", field, literal(&condition.value)),
        },
        FilterOperator::In | FilterOperator::NotIn => {
            let keyword = if condition.operator == FilterOperator::In {
                "IN"
            } else {
                "NOT IN"
            };
            let items: Vec<String> = condition
                .value
                .as_array()
                .unwrap_or(&[])
                .iter()
                .map(literal)
                .collect();
            format!("{} {} ({})", field, keyword, items.join(", "))
        }
        FilterOperator::Like => {
            let text = condition.value.to_string();
            format!("LOWER({}) LIKE LOWER({})", field, quote(&format!("%{}%", text)))
        }
        FilterOperator::Custom => {
            let sql = condition
                .custom_sql
                .clone()
                .unwrap_or_else(|| condition.value.to_string());
            format!("({})", sql)
        }
        op => {
            // Comparison operators always have a symbol.
            let symbol = op.sql_symbol().unwrap_or("=");
            format!("{} {} {}", field, symbol, literal(&condition.value))
        }
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string().to_uppercase(),
        Value::Null => "NULL".to_string(),
        other => quote(&other.to_string()),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn legacy_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty()
        || digits == "."
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        || digits.matches('.').count() > 1
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Text after the first whitespace-delimited `AND` that has a predicate on both sides
fn compound_tail(t: &str) -> Option<&str> {
    t.char_indices()
        .filter(|(pos, _)| {
            t.get(*pos..pos + 3)
                .is_some_and(|kw| kw.eq_ignore_ascii_case("AND"))
        })
        .find_map(|(pos, _)| {
            let before = &t[..pos];
            let after = &t[pos + 3..];
            let spaced = before.ends_with(char::is_whitespace)
                && after.starts_with(char::is_whitespace);
            let first = before.trim_end();
            let second = after.trim_start();
            (spaced && !first.is_empty() && !second.is_empty()).then_some(second)
        })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// End of a `p_itemN` placeholder starting at `pos`, if it stands as a whole word
fn placeholder_end(s: &str, pos: usize) -> Option<usize> {
    if s[..pos].chars().next_back().is_some_and(is_word_char) {
        return None;
    }
    let start = pos + PLACEHOLDER_PREFIX.len();
    let digits = s[start..].chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let end = start + digits;
    if s[end..].chars().next().is_some_and(is_word_char) {
        return None;
    }
    Some(end)
}

fn has_placeholder(s: &str) -> bool {
    s.match_indices(PLACEHOLDER_PREFIX)
        .any(|(pos, _)| placeholder_end(s, pos).is_some())
}

fn replace_placeholders(s: &str, field: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (pos, _) in s.match_indices(PLACEHOLDER_PREFIX) {
        if let Some(end) = placeholder_end(s, pos) {
            out.push_str(&s[last..pos]);
            out.push_str(field);
            last = end;
        }
    }
    out.push_str(&s[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_parser::parse_filter_value;

    const TOKENS: &[&str] = &[
        "[100,499]",
        "[ 0.5 , 1.5 ]",
        "BETWEEN 500 AND 999",
        "between 1 and 2",
        "NOT IN ('A','B')",
        "not in (\"Camera Link\", GigE)",
        ">=1000",
        "<=1000",
        ">8",
        "<0.25",
        ">=8 AND p_item4<=16",
        "4800",
        "3.5",
        "Mono",
        "!Mono,Color",
        "O'Brien",
        ">=8\tAND p_item4<=16",
        ">=8 AND xp_item4<=16",
        ">=8 AND p_item4x<=16",
        ">=8  and  p_item4<=16 AND p_item4>0",
        "NOT IN (''A'')",
        "NOT IN ('A\"')",
        "p_item1p_item2 AND p_item3",
    ];

    #[test]
    fn test_legacy_and_structured_paths_agree() {
        for token in TOKENS {
            let legacy = legacy_inline_predicate("f", token);
            let structured = render_inline(&parse_filter_value("f", token));
            assert_eq!(legacy, structured, "token {:?}", token);
        }
    }

    #[test]
    fn test_legacy_forms() {
        assert_eq!(legacy_inline_predicate("dpi", "4800"), "dpi = 4800");
        assert_eq!(legacy_inline_predicate("color", "Mono"), "color = 'Mono'");
        assert_eq!(
            legacy_inline_predicate("scan_width", "[100,499]"),
            "scan_width BETWEEN 100 AND 499"
        );
        assert_eq!(
            legacy_inline_predicate("pixel", ">=8 AND p_item4<=16"),
            "(pixel>=8 AND pixel<=16)"
        );
        assert_eq!(legacy_inline_predicate("name", "O'Brien"), "name = 'O''Brien'");
    }

    #[test]
    fn test_render_like_and_in() {
        let like = FilterCondition::like("partnumber", "abc");
        assert_eq!(render_inline(&like), "LOWER(partnumber) LIKE LOWER('%abc%')");

        let in_list = FilterCondition::in_list("category", vec!["cis".into(), "tdi".into()]);
        assert_eq!(render_inline(&in_list), "category IN ('cis', 'tdi')");
    }

    #[test]
    fn test_replace_placeholders_keeps_bare_prefix() {
        assert_eq!(replace_placeholders("p_item1 < p_item", "x"), "x < p_item");
    }

    #[test]
    fn test_replace_placeholders_whole_words_only() {
        assert_eq!(
            replace_placeholders("xp_item1 < p_item2 AND p_item3y", "f"),
            "xp_item1 < f AND p_item3y"
        );
        assert!(!has_placeholder("p_item1p_item2"));
    }

    #[test]
    fn test_compound_split_on_any_whitespace() {
        assert_eq!(compound_tail(">=8\tAND p_item4<=16"), Some("p_item4<=16"));
        assert_eq!(compound_tail("BRAND x"), None);
        assert_eq!(compound_tail(" AND x"), None);
    }
}
