//! HTTP response handling.
//!
//! [`HttpResponse`] is what a transport hands back: status, headers and a
//! fully drained body. [`Response::classify`] turns it into either a
//! successful [`Response`] with parsed [`Pagination`] and [`RateLimit`], or
//! a status-driven [`Error`]. A failure never yields a response alongside.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::HeaderMap;
//! use unsplash_core::{HttpResponse, Response};
//!
//! let raw = HttpResponse::new(200, HeaderMap::new(), Bytes::from_static(br#"{"id":"abc"}"#));
//! let response = Response::classify(raw).expect("success");
//! let value: serde_json::Value = response.json().expect("json");
//! assert_eq!(value["id"], "abc");
//! ```

use bytes::Bytes;
use http::HeaderMap;
use tracing::debug;

use crate::{Error, Pagination, RateLimit, Result};

/// Statuses accepted as success.
pub const SUCCESS_STATUSES: [u16; 5] = [200, 201, 202, 204, 205];

/// Raw response as produced by an [`crate::HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Status is one of the accepted success codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status)
    }
}

/// Successful API response with pagination and rate-limit metadata.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
    pagination: Pagination,
    rate_limit: RateLimit,
}

impl Response {
    /// Classify a raw response.
    ///
    /// Checks run in this order:
    /// 1. 200, 201, 202, 204, 205: success
    /// 2. 401: [`Error::Authorization`]
    /// 3. 403 with `X-Ratelimit-Remaining: 0`: [`Error::RateLimitExceeded`];
    ///    any other 403 (remaining absent, unparseable or positive):
    ///    [`Error::Authorization`]
    /// 4. 404: [`Error::NotFound`]
    /// 5. anything else: [`Error::Api`] with status and body
    ///
    /// # Errors
    ///
    /// Returns the status-driven error described above.
    pub fn classify(raw: HttpResponse) -> Result<Self> {
        let HttpResponse {
            status,
            headers,
            body,
        } = raw;
        let rate_limit = RateLimit::from_headers(&headers);

        if SUCCESS_STATUSES.contains(&status) {
            let pagination = Pagination::from_headers(&headers);
            return Ok(Self {
                status,
                headers,
                body,
                pagination,
                rate_limit,
            });
        }

        let body = String::from_utf8_lossy(&body).into_owned();
        let error = match status {
            401 => Error::Authorization { status, body },
            403 if rate_limit.is_exhausted() => Error::RateLimitExceeded {
                limit: rate_limit.limit(),
                body,
            },
            403 => Error::Authorization { status, body },
            404 => Error::NotFound { body },
            _ => Error::Api { status, body },
        };
        debug!(status, error = %error, "request failed");
        Err(error)
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Single header value by name, if it is valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Response body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Pages advertised by the `Link` header.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Counters from the rate-limit headers.
    #[must_use]
    pub const fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    /// Fails with [`Error::UnexpectedStatus`] unless the status is `expected`.
    ///
    /// # Errors
    ///
    /// Returns an error if the status differs.
    pub fn expect_status(&self, expected: u16) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus {
                expected,
                actual: self.status,
            })
        }
    }

    /// Deserialize body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error with the JSON path if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// Body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| Error::InvalidBody(format!("not UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use http::HeaderValue;

    use super::*;

    fn raw(status: u16, headers: &[(&'static str, &'static str)], body: &'static str) -> HttpResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.append(*name, HeaderValue::from_static(value));
        }
        HttpResponse::new(status, map, Bytes::from_static(body.as_bytes()))
    }

    #[derive(Debug, serde::Deserialize)]
    struct Id {
        id: String,
    }

    #[test]
    fn ok_json_body() {
        let response = Response::classify(raw(200, &[], r#"{"id":"abc"}"#)).expect("success");
        let id: Id = response.json().expect("json");
        check!(id.id == "abc");
        check!(response.status() == 200);
        check!(response.pagination() == Pagination::default());
    }

    #[test]
    fn every_success_status_is_accepted() {
        for status in SUCCESS_STATUSES {
            let_assert!(Ok(response) = Response::classify(raw(status, &[], "")));
            check!(response.status() == status);
        }
    }

    #[test]
    fn other_2xx_and_3xx_are_errors() {
        for status in [203, 206, 301, 304] {
            let_assert!(Err(Error::Api { status: got, .. }) = Response::classify(raw(status, &[], "")));
            check!(got == status);
        }
    }

    #[test]
    fn unauthorized() {
        let result = Response::classify(raw(401, &[], "bad token"));
        let_assert!(Err(Error::Authorization { status, body }) = result);
        check!(status == 401);
        check!(body == "bad token");
    }

    #[test]
    fn forbidden_with_zero_remaining_is_rate_limit() {
        let result = Response::classify(raw(
            403,
            &[("X-Ratelimit-Limit", "50"), ("X-Ratelimit-Remaining", "0")],
            "Rate Limit Exceeded",
        ));
        let_assert!(Err(Error::RateLimitExceeded { limit, body }) = result);
        check!(limit == 50);
        check!(body == "Rate Limit Exceeded");
    }

    #[test]
    fn forbidden_with_quota_left_is_authorization() {
        let result = Response::classify(raw(403, &[("X-Ratelimit-Remaining", "5")], "nope"));
        let_assert!(Err(Error::Authorization { status: 403, .. }) = result);
    }

    #[test]
    fn forbidden_without_header_is_authorization() {
        let result = Response::classify(raw(403, &[], "nope"));
        let_assert!(Err(Error::Authorization { status: 403, .. }) = result);

        let result = Response::classify(raw(403, &[("X-Ratelimit-Remaining", "zero")], "nope"));
        let_assert!(Err(Error::Authorization { status: 403, .. }) = result);
    }

    #[test]
    fn not_found() {
        let result = Response::classify(raw(404, &[], r#"{"errors":["Couldn't find Photo"]}"#));
        let_assert!(Err(Error::NotFound { body }) = result);
        check!(body.contains("Couldn't find Photo"));
    }

    #[test]
    fn server_error_carries_status_and_body() {
        let result = Response::classify(raw(503, &[], "maintenance"));
        let_assert!(Err(err) = result);
        check!(err.status() == Some(503));
        check!(err.to_string() == "API error 503: maintenance");
    }

    #[test]
    fn success_parses_metadata() {
        let response = Response::classify(raw(
            200,
            &[
                ("Link", r#"<https://api.unsplash.com/photos?page=2>; rel="next""#),
                ("X-Ratelimit-Limit", "5000"),
                ("X-Ratelimit-Remaining", "4999"),
            ],
            "[]",
        ))
        .expect("success");

        check!(response.pagination().next == 2);
        check!(response.pagination().has_next_page);
        check!(response.rate_limit().limit() == 5000);
        check!(response.rate_limit().remaining() == 4999);
        check!(response.header("x-ratelimit-limit") == Some("5000"));
    }

    #[test]
    fn expect_status() {
        let response = Response::classify(raw(200, &[], "")).expect("success");
        check!(response.expect_status(200).is_ok());
        let_assert!(Err(Error::UnexpectedStatus { expected: 201, actual: 200 }) = response.expect_status(201));
    }

    #[test]
    fn text_body() {
        let response = Response::classify(raw(200, &[], "hello")).expect("success");
        check!(response.text().expect("utf8") == "hello");
        check!(response.into_body() == Bytes::from_static(b"hello"));
    }

    #[test]
    fn non_utf8_body_is_a_body_error() {
        let response = Response::classify(HttpResponse::new(
            200,
            HeaderMap::new(),
            Bytes::from_static(&[0xff, 0xfe, b'a']),
        ))
        .expect("success");
        let_assert!(Err(Error::InvalidBody(message)) = response.text());
        check!(message.contains("UTF-8"));
    }
}
