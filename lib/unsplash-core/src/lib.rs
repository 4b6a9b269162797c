//! Protocol layer for the Unsplash API.
//!
//! This crate holds everything that does not touch the network:
//! - [`Request::api`] builds a request from a verb, an endpoint path and
//!   optional query and JSON body payloads
//! - [`Response::classify`] maps a raw [`HttpResponse`] to a success value or
//!   a typed [`Error`], extracting [`Pagination`] and [`RateLimit`]
//! - [`ListOpt`], [`SearchOpt`] and friends normalize and validate query
//!   options before any request is built
//! - [`HttpClient`] is the transport seam implemented by the `unsplash` crate
//!
//! ```
//! use bytes::Bytes;
//! use http::HeaderMap;
//! use unsplash_core::{Error, HttpResponse, Response};
//!
//! let raw = HttpResponse::new(404, HeaderMap::new(), Bytes::from_static(b"missing"));
//! assert!(matches!(Response::classify(raw), Err(Error::NotFound { .. })));
//! ```

mod body;
mod client;
mod endpoint;
mod error;
mod method;
mod options;
mod pagination;
pub mod prelude;
mod rate_limit;
mod request;
mod response;

pub use body::{JSON_CONTENT_TYPE, comma_separated, from_json, to_json, to_query_string};
pub use client::HttpClient;
pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::{Error, Result};
pub use method::Method;
pub use options::{
    CollectionOpt, DEFAULT_PAGE, DEFAULT_PER_PAGE, ListOpt, MAX_STATS_QUANTITY, OrderBy,
    Orientation, PhotoOpt, PhotoQuery, ProfileImageOpt, RandomPhotoOpt, SearchOpt, StatsOpt,
    UserUpdateInfo,
};
pub use pagination::Pagination;
pub use rate_limit::{RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RateLimit};
pub use request::{ACCEPT_VERSION, API_VERSION, Request, RequestBuilder};
pub use response::{HttpResponse, Response, SUCCESS_STATUSES};

// Re-export http crate types for status codes and headers
pub use http::{HeaderMap, StatusCode, header};
