//! Rate-limit headers.

use http::HeaderMap;
use tracing::trace;

/// Header carrying the hourly request ceiling.
pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header carrying the requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Rate-limit counters reported by the API.
///
/// Missing or unparseable headers are treated as absent metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RateLimit {
    limit: Option<u32>,
    remaining: Option<u32>,
}

impl RateLimit {
    /// Create counters from known values.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32) -> Self {
        Self {
            limit: Some(limit),
            remaining: Some(remaining),
        }
    }

    /// Read `X-Ratelimit-Limit` and `X-Ratelimit-Remaining`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: single_number(headers, RATE_LIMIT_HEADER),
            remaining: single_number(headers, RATE_LIMIT_REMAINING_HEADER),
        }
    }

    /// Request ceiling, zero when not reported.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or_default()
    }

    /// Requests left, zero when not reported.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining.unwrap_or_default()
    }

    /// Requests left, `None` when the header was missing or unparseable.
    #[must_use]
    pub const fn remaining_reported(&self) -> Option<u32> {
        self.remaining
    }

    /// `true` only when the server explicitly reported zero remaining requests.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

// Multi-valued headers are ambiguous and count as absent.
fn single_number(headers: &HeaderMap, name: &str) -> Option<u32> {
    let mut values = headers.get_all(name).iter();
    let value = values.next()?;
    if values.next().is_some() {
        trace!(header = name, "ignoring multi-valued rate limit header");
        return None;
    }

    let parsed = value.to_str().ok().and_then(|raw| raw.trim().parse().ok());
    if parsed.is_none() {
        trace!(header = name, ?value, "ignoring unparseable rate limit header");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(*name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn reads_both_counters() {
        let rate = RateLimit::from_headers(&headers(&[
            ("X-Ratelimit-Limit", "50"),
            ("X-Ratelimit-Remaining", "42"),
        ]));
        assert_eq!(rate.limit(), 50);
        assert_eq!(rate.remaining(), 42);
        assert_eq!(rate.remaining_reported(), Some(42));
        assert!(!rate.is_exhausted());
    }

    #[test]
    fn missing_headers_default_to_zero() {
        let rate = RateLimit::from_headers(&HeaderMap::new());
        assert_eq!(rate.limit(), 0);
        assert_eq!(rate.remaining(), 0);
        assert_eq!(rate.remaining_reported(), None);
        assert!(!rate.is_exhausted());
    }

    #[test]
    fn garbage_is_silently_ignored() {
        let rate = RateLimit::from_headers(&headers(&[
            ("X-Ratelimit-Limit", "lots"),
            ("X-Ratelimit-Remaining", "-1"),
        ]));
        assert_eq!(rate, RateLimit::default());
    }

    #[test]
    fn multi_valued_header_is_ignored() {
        let rate = RateLimit::from_headers(&headers(&[
            ("X-Ratelimit-Remaining", "0"),
            ("X-Ratelimit-Remaining", "3"),
        ]));
        assert_eq!(rate.remaining_reported(), None);
    }

    #[test]
    fn explicit_zero_is_exhausted() {
        let rate = RateLimit::from_headers(&headers(&[("X-Ratelimit-Remaining", "0")]));
        assert!(rate.is_exhausted());
        assert_eq!(RateLimit::new(50, 0), RateLimit::new(50, 0));
    }
}
