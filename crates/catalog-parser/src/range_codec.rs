//! URL range-token codec
//!
//! Slider ranges travel through the URL as one token:
//!
//! ```text
//! 100-499    min 100, max 499
//! 5000-      min 5000, open max
//! -999       open min, max 999
//! 4800       point value (min == max)
//! ""         no range
//! ```
//!
//! The first `-` is the separator, so negative bounds cannot be encoded.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A possibly open numeric range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeToken {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeToken {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Closed range
    pub fn closed(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// True when neither bound is set
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// True when both bounds are set and equal
    pub fn is_point(&self) -> bool {
        matches!((self.min, self.max), (Some(a), Some(b)) if a == b)
    }

    /// Encode into URL form
    pub fn encode(&self) -> String {
        encode_range_token(self.min, self.max)
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Strict parse: non-numeric sides and inverted ranges are errors
impl FromStr for RangeToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min_str, max_str) = match s.find('-') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, s),
        };

        let strict = |side: &str| -> Result<Option<f64>, ParseError> {
            if side.trim().is_empty() {
                return Ok(None);
            }
            parse_side(side).map(Some).ok_or_else(|| ParseError::InvalidRangeToken {
                token: s.to_string(),
                message: format!("'{}' is not a number", side),
            })
        };

        let token = RangeToken::new(strict(min_str)?, strict(max_str)?);
        if let (Some(min), Some(max)) = (token.min, token.max) {
            if min > max {
                return Err(ParseError::InvertedRange(s.to_string()));
            }
        }
        Ok(token)
    }
}

/// Encode a range into a single URL token
pub fn encode_range_token(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        (Some(min), None) => format!("{}-", min),
        (None, Some(max)) => format!("-{}", max),
        (None, None) => String::new(),
    }
}

/// Decode a URL token into a range
///
/// Lenient: a side that is empty or not a number decodes as `None`.
pub fn decode_range_token(token: &str) -> RangeToken {
    match token.find('-') {
        None => {
            let point = parse_side(token);
            RangeToken::new(point, point)
        }
        Some(pos) => RangeToken::new(parse_side(&token[..pos]), parse_side(&token[pos + 1..])),
    }
}

fn parse_side(side: &str) -> Option<f64> {
    let side = side.trim();
    if side.is_empty() {
        return None;
    }
    side.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_forms() {
        assert_eq!(encode_range_token(Some(100.0), Some(499.0)), "100-499");
        assert_eq!(encode_range_token(Some(5000.0), None), "5000-");
        assert_eq!(encode_range_token(None, Some(999.0)), "-999");
        assert_eq!(encode_range_token(None, None), "");
        assert_eq!(encode_range_token(Some(0.5), Some(1.25)), "0.5-1.25");
    }

    #[test]
    fn test_decode_forms() {
        assert_eq!(decode_range_token("100-499"), RangeToken::closed(100.0, 499.0));
        assert_eq!(
            decode_range_token("5000-"),
            RangeToken::new(Some(5000.0), None)
        );
        assert_eq!(decode_range_token("-999"), RangeToken::new(None, Some(999.0)));
        assert_eq!(decode_range_token("4800"), RangeToken::closed(4800.0, 4800.0));
        assert!(decode_range_token("").is_empty());
    }

    #[test]
    fn test_roundtrip_non_negative() {
        let pairs = [(0.0, 0.0), (0.0, 10.0), (3.5, 7.25), (100.0, 499.0), (1e6, 2e6)];
        for (a, b) in pairs {
            let token = encode_range_token(Some(a), Some(b));
            assert_eq!(decode_range_token(&token), RangeToken::closed(a, b), "{}", token);
        }
    }

    #[test]
    fn test_decode_negative_is_ambiguous() {
        // "-5-10": the leading minus is read as the separator.
        let token = decode_range_token("-5-10");
        assert_eq!(token.min, None);
        assert_eq!(token.max, None);
    }

    #[test]
    fn test_decode_garbage_sides() {
        assert_eq!(decode_range_token("abc-10"), RangeToken::new(None, Some(10.0)));
        assert!(decode_range_token("inf").is_empty());
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            "100-499".parse::<RangeToken>().unwrap(),
            RangeToken::closed(100.0, 499.0)
        );
        assert!(matches!(
            "abc-10".parse::<RangeToken>(),
            Err(ParseError::InvalidRangeToken { .. })
        ));
        assert!(matches!(
            "10-1".parse::<RangeToken>(),
            Err(ParseError::InvertedRange(_))
        ));
    }

    #[test]
    fn test_point_and_display() {
        let point = RangeToken::closed(5.0, 5.0);
        assert!(point.is_point());
        assert_eq!(point.to_string(), "5-5");
        assert!(!RangeToken::new(Some(5.0), None).is_point());
    }
}
