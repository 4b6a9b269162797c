//! Error types for the Unsplash client.
//!
//! Every fallible operation returns exactly one [`Error`]. Argument and option
//! problems ([`Error::IllegalArgument`], [`Error::InvalidOptions`]) are raised
//! before any request leaves the process. Status-driven variants are produced
//! by [`crate::Response::classify`], transport variants by the
//! [`crate::HttpClient`] implementation.

use derive_more::{Display, Error, From};

/// Main error type for Unsplash operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Malformed caller input: empty endpoint, empty id, missing payload.
    #[display("illegal argument: {_0}")]
    #[from(skip)]
    IllegalArgument(#[error(not(source))] String),

    /// List, search or photo options failed normalization rules.
    #[display("invalid options: {_0}")]
    #[from(skip)]
    InvalidOptions(#[error(not(source))] String),

    /// 401, or 403 while quota remains.
    #[display("authorization error ({status}): {body}")]
    #[from(skip)]
    Authorization {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Response body text.
        body: String,
    },

    /// 403 reported together with `X-Ratelimit-Remaining: 0`.
    #[display("rate limit exhausted (limit {limit}): {body}")]
    #[from(skip)]
    RateLimitExceeded {
        /// Value of `X-Ratelimit-Limit`, zero when absent.
        limit: u32,
        /// Response body text.
        body: String,
    },

    /// 404.
    #[display("resource not found: {body}")]
    #[from(skip)]
    NotFound {
        /// Response body text.
        body: String,
    },

    /// Any other non-success status.
    #[display("API error {status}: {body}")]
    #[from(skip)]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// A success status other than the one the operation requires.
    #[display("unexpected status {actual}, expected {expected}")]
    #[from(skip)]
    UnexpectedStatus {
        /// Status the operation requires.
        expected: u16,
        /// Status the server answered with.
        actual: u16,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout enforced by the HTTP client.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.profile_image.small").
        path: String,
        /// Error message.
        message: String,
    },

    /// Response body is not UTF-8 text.
    #[display("invalid response body: {_0}")]
    #[from(skip)]
    InvalidBody(#[error(not(source))] String),

    /// Query string serialization error.
    #[display("query serialization error: {_0}")]
    #[from]
    QuerySerialization(serde_html_form::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an illegal argument error.
    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// Create an invalid options error.
    #[must_use]
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for status-driven errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authorization { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::RateLimitExceeded { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }

    /// Returns `true` for 401 and non-exhausted 403 responses.
    #[must_use]
    pub const fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization { .. })
    }

    /// Returns `true` if the rate limit is exhausted.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded { .. })
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the error was raised before any network call.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::IllegalArgument(_) | Self::InvalidOptions(_))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
