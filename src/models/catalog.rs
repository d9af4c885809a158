//! Catalog page and rate-limit models

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response header carrying the remaining request budget
pub const REQUESTS_LEFT_HEADER: &str = "X-Rate-Limit-Requests-Left";

/// Response header carrying the budget reset delay in milliseconds
pub const TIME_RESET_MS_HEADER: &str = "X-Rate-Limit-Time-Reset-Ms";

/// One page of the catalog products listing
///
/// Items are schema-validated as JSON objects but otherwise opaque; the CLI
/// never inspects product fields.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Map<String, Value>>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub links: PaginationLinks,
}

#[derive(Debug, Deserialize)]
pub struct PaginationLinks {
    /// Continuation fragment for the next page, starting with its own `?`
    #[serde(default)]
    pub next: Option<String>,
}

impl CatalogPage {
    /// The continuation fragment, if another page exists
    pub fn next_link(&self) -> Option<&str> {
        self.meta.pagination.links.next.as_deref()
    }
}

/// Rate-limit state advertised by a response's headers
///
/// Derived fresh from each continuation response; absent or non-numeric
/// header values parse to `None`. The values are server-controlled and not
/// guaranteed present, so a missing budget never throttles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSignal {
    /// Requests the caller may still issue before the window resets
    pub requests_left: Option<i64>,
    /// Time until the budget resets
    pub reset_after: Option<Duration>,
}

impl RateLimitSignal {
    /// Extract the signal from response headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            requests_left: parse_numeric_header(headers, REQUESTS_LEFT_HEADER),
            reset_after: parse_numeric_header::<u64>(headers, TIME_RESET_MS_HEADER)
                .map(Duration::from_millis),
        }
    }

    /// How long to pause before consuming the response, if the budget is spent
    ///
    /// Returns `Some` only when the remaining budget parsed and is below 1.
    /// An exhausted budget with no parseable reset delay waits zero time.
    pub fn throttle_delay(&self) -> Option<Duration> {
        match self.requests_left {
            Some(left) if left < 1 => Some(self.reset_after.unwrap_or(Duration::ZERO)),
            _ => None,
        }
    }
}

fn parse_numeric_header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers_with(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(
                name.parse::<HeaderName>().unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn test_page_parsing_is_idempotent() {
        let body = r#"{
            "data": [ { "id": 1 }, { "id": 2 } ],
            "meta": { "pagination": { "links": { "next": "?page=2" } } }
        }"#;

        let first: CatalogPage = serde_json::from_str(body).unwrap();
        let second: CatalogPage = serde_json::from_str(body).unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(first.next_link(), second.next_link());
        assert_eq!(first.next_link(), Some("?page=2"));
    }

    #[test]
    fn test_last_page_has_no_next_link() {
        let body = r#"{
            "data": [],
            "meta": { "pagination": { "links": {} } }
        }"#;

        let page: CatalogPage = serde_json::from_str(body).unwrap();
        assert!(page.next_link().is_none());
    }

    #[test]
    fn test_non_object_items_fail_validation() {
        let body = r#"{
            "data": [ 42 ],
            "meta": { "pagination": { "links": {} } }
        }"#;

        assert!(serde_json::from_str::<CatalogPage>(body).is_err());
    }

    #[test]
    fn test_signal_parses_numeric_headers() {
        let headers = headers_with(&[
            (REQUESTS_LEFT_HEADER, "20"),
            (TIME_RESET_MS_HEADER, "1500"),
        ]);

        let signal = RateLimitSignal::from_headers(&headers);
        assert_eq!(signal.requests_left, Some(20));
        assert_eq!(signal.reset_after, Some(Duration::from_millis(1500)));
        assert_eq!(signal.throttle_delay(), None);
    }

    #[test]
    fn test_signal_throttles_on_exhausted_budget() {
        let headers = headers_with(&[
            (REQUESTS_LEFT_HEADER, "0"),
            (TIME_RESET_MS_HEADER, "500"),
        ]);

        let signal = RateLimitSignal::from_headers(&headers);
        assert_eq!(signal.throttle_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_signal_absent_headers_do_not_throttle() {
        let signal = RateLimitSignal::from_headers(&HeaderMap::new());
        assert_eq!(signal.requests_left, None);
        assert_eq!(signal.reset_after, None);
        assert_eq!(signal.throttle_delay(), None);
    }

    #[test]
    fn test_signal_non_numeric_headers_do_not_throttle() {
        let headers = headers_with(&[
            (REQUESTS_LEFT_HEADER, "not-a-number"),
            (TIME_RESET_MS_HEADER, "soon"),
        ]);

        let signal = RateLimitSignal::from_headers(&headers);
        assert_eq!(signal.throttle_delay(), None);
    }

    #[test]
    fn test_signal_exhausted_budget_without_reset_waits_zero() {
        let headers = headers_with(&[(REQUESTS_LEFT_HEADER, "0")]);

        let signal = RateLimitSignal::from_headers(&headers);
        assert_eq!(signal.throttle_delay(), Some(Duration::ZERO));
    }

    #[test]
    fn test_signal_negative_budget_throttles() {
        let headers = headers_with(&[
            (REQUESTS_LEFT_HEADER, "-1"),
            (TIME_RESET_MS_HEADER, "250"),
        ]);

        let signal = RateLimitSignal::from_headers(&headers);
        assert_eq!(signal.throttle_delay(), Some(Duration::from_millis(250)));
    }
}
