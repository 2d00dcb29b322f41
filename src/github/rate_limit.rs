// src/github/rate_limit.rs
// =============================================================================
// Reads GitHub's X-RateLimit-Remaining header.
//
// The header value is parsed leniently: leading whitespace and a sign are
// accepted, and parsing stops at the first non-digit ("12abc" -> 12,
// "0.5" -> 0). A value with no leading digits at all is treated as
// "unknown", which never blocks a request.
// =============================================================================

use reqwest::header::HeaderMap;

pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Returns true when the response says we have no requests left.
pub fn is_exhausted(headers: &HeaderMap) -> bool {
    remaining(headers).map_or(false, |left| left < 1)
}

/// The remaining request count, if the header is present and readable.
pub fn remaining(headers: &HeaderMap) -> Option<i64> {
    let value = headers.get(REMAINING_HEADER)?.to_str().ok()?;
    parse_leading_int(value)
}

fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Huge counts saturate instead of failing; they are "plenty left" either way.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REMAINING_HEADER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_zero_is_exhausted() {
        assert!(is_exhausted(&headers_with("0")));
    }

    #[test]
    fn test_positive_is_not_exhausted() {
        assert!(!is_exhausted(&headers_with("59")));
        assert_eq!(remaining(&headers_with("59")), Some(59));
    }

    #[test]
    fn test_missing_header_is_not_exhausted() {
        assert!(!is_exhausted(&HeaderMap::new()));
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("0.5"), Some(0));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_garbage_never_blocks() {
        assert!(!is_exhausted(&headers_with("unknown")));
    }
}
