//! HTTP request building.
//!
//! [`Request::api`] turns a verb, an endpoint path and optional query/body
//! payloads into a ready-to-send request. [`Request::builder`] gives direct
//! access to the underlying builder.
//!
//! # Example
//!
//! ```
//! use unsplash_core::{Method, Request};
//! use url::Url;
//!
//! #[derive(serde::Serialize)]
//! struct Page { page: u32 }
//!
//! let base = Url::parse("https://api.unsplash.com/").unwrap();
//! let request = Request::api(&base, Method::Get, "photos", Some(&Page { page: 2 }), None::<&()>)
//!     .unwrap();
//! assert_eq!(request.url().as_str(), "https://api.unsplash.com/photos?page=2");
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use url::Url;

use crate::{Error, Method, Result};

/// Header carrying the API version marker.
pub const ACCEPT_VERSION: &str = "Accept-Version";

/// API version sent with every request.
pub const API_VERSION: &str = "v1";

/// An HTTP request with method, URL, headers, and optional body.
///
/// Immutable once built; one request is sent exactly once.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// Build an API request against `base_url`.
    ///
    /// The query object is URL-encoded with its serde field names; the body
    /// object is JSON-encoded. `Content-Type: application/json` and
    /// `Accept-Version: v1` are always present. No I/O happens here.
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalArgument`] if `endpoint` is empty
    /// - serialization errors from the query or body, unchanged
    pub fn api<Q, B>(
        base_url: &Url,
        method: Method,
        endpoint: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Self>
    where
        Q: serde::Serialize + ?Sized,
        B: serde::Serialize + ?Sized,
    {
        if endpoint.is_empty() {
            return Err(Error::illegal_argument("endpoint cannot be empty"));
        }

        let url = base_url.join(endpoint.trim_start_matches('/'))?;
        let mut builder = Self::builder(method, url)
            .header("Content-Type", crate::JSON_CONTENT_TYPE)
            .header(ACCEPT_VERSION, API_VERSION);

        if let Some(body) = body {
            builder = builder.json(body)?;
        }
        if let Some(query) = query {
            builder = builder.query_string(&crate::to_query_string(query)?);
        }

        Ok(builder.build())
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Replaces the URL query with an already-encoded string.
    ///
    /// An empty string leaves the URL without a `?`.
    #[must_use]
    pub fn query_string(mut self, encoded: &str) -> Self {
        if encoded.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(encoded));
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self
            .header("Content-Type", crate::JSON_CONTENT_TYPE)
            .body(body))
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};

    use super::*;

    fn base() -> Url {
        Url::parse("https://api.unsplash.com/").expect("valid URL")
    }

    #[derive(serde::Serialize)]
    struct ListQuery {
        page: i32,
        per_page: i32,
        order_by: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        featured: Option<bool>,
    }

    #[test]
    fn empty_endpoint_is_illegal() {
        let result = Request::api(&base(), Method::Get, "", None::<&()>, None::<&()>);
        let_assert!(Err(Error::IllegalArgument(_)) = result);
    }

    #[test]
    fn api_request_carries_default_headers() {
        let request =
            Request::api(&base(), Method::Get, "photos", None::<&()>, None::<&()>).expect("build");

        check!(request.method() == Method::Get);
        check!(request.url().as_str() == "https://api.unsplash.com/photos");
        check!(request.header("Content-Type") == Some("application/json"));
        check!(request.header(ACCEPT_VERSION) == Some("v1"));
        check!(request.body().is_none());
    }

    #[test]
    fn query_round_trips_and_omits_empty_fields() {
        let query = ListQuery {
            page: 2,
            per_page: 10,
            order_by: "popular",
            featured: None,
        };
        let request =
            Request::api(&base(), Method::Get, "photos", Some(&query), None::<&()>).expect("build");

        let pairs: HashMap<String, String> = request.url().query_pairs().into_owned().collect();
        check!(pairs.len() == 3);
        check!(pairs["page"] == "2");
        check!(pairs["per_page"] == "10");
        check!(pairs["order_by"] == "popular");
        check!(!pairs.contains_key("featured"));
    }

    #[test]
    fn body_is_json_encoded() {
        #[derive(serde::Serialize)]
        struct Update {
            bio: &'static str,
        }

        let request = Request::api(
            &base(),
            Method::Put,
            "me",
            None::<&()>,
            Some(&Update { bio: "hello" }),
        )
        .expect("build");

        check!(request.method() == Method::Put);
        check!(request.body().map(|b| b.to_vec()) == Some(br#"{"bio":"hello"}"#.to_vec()));
    }

    #[test]
    fn base_url_with_path_is_preserved() {
        let base = Url::parse("http://127.0.0.1:8080/api/").expect("valid URL");
        let request =
            Request::api(&base, Method::Delete, "/collections/42", None::<&()>, None::<&()>)
                .expect("build");
        check!(request.url().as_str() == "http://127.0.0.1:8080/api/collections/42");
    }

    #[test]
    fn empty_query_leaves_no_question_mark() {
        #[derive(serde::Serialize)]
        struct Nothing {
            #[serde(skip_serializing_if = "Option::is_none")]
            w: Option<u32>,
        }

        let request = Request::api(
            &base(),
            Method::Get,
            "photos/random",
            Some(&Nothing { w: None }),
            None::<&()>,
        )
        .expect("build");
        check!(request.url().query().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let url = Url::parse("https://api.unsplash.com/photos").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .query("page", "1")
            .query("per_page", "10")
            .build();

        check!(request.url().as_str() == "https://api.unsplash.com/photos?page=1&per_page=10");
    }
}
