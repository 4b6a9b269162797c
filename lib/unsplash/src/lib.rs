//! Typed async client for the [Unsplash](https://unsplash.com/developers) API.
//!
//! [`Unsplash`] is the entry point. It resolves endpoint paths against a base
//! URL, sends each request once through an [`HttpClient`] and turns the
//! answer into a typed value plus the [`Response`] metadata (status,
//! [`Pagination`] and [`RateLimit`]) or a typed [`Error`].
//!
//! Resource calls are grouped by service:
//! [`photos`](Unsplash::photos), [`collections`](Unsplash::collections),
//! [`users`](Unsplash::users) and [`search`](Unsplash::search).
//!
//! # Example
//!
//! ```no_run
//! use unsplash::prelude::*;
//!
//! # async fn run() -> unsplash::Result<()> {
//! let unsplash = Unsplash::with_client_id(HyperClient::new(), "my-access-key");
//!
//! let (results, response) = unsplash.search().photos(&SearchOpt::new("mountains")).await?;
//! for photo in &results.results {
//!     println!("{:?}", photo.id);
//! }
//! println!("{} requests left", response.rate_limit().remaining());
//!
//! match unsplash.photos().photo("does-not-exist", None).await {
//!     Err(err) if err.is_not_found() => println!("no such photo"),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! User-level calls ([`Unsplash::current_user`], likes, collection writes)
//! need a bearer token, injected by the HTTP client:
//!
//! ```no_run
//! use unsplash::{HyperClient, Unsplash};
//!
//! let client = HyperClient::builder().with_bearer_auth("user-token").build();
//! let unsplash = Unsplash::new(client);
//! ```

mod client;
mod config;
mod connector;
pub mod middleware;
pub mod models;
pub mod prelude;
mod services;
mod unsplash;

pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use services::{CollectionsService, PhotosService, SearchService, UsersService};
pub use unsplash::{Unsplash, UnsplashBuilder};

// Re-export tower for middleware composition
pub use tower;

pub use unsplash_core::{
    ACCEPT_VERSION, API_VERSION, CollectionOpt, DEFAULT_BASE_URL, DEFAULT_PAGE, DEFAULT_PER_PAGE,
    Endpoint, Error, HttpClient, HttpResponse, ListOpt, MAX_STATS_QUANTITY, Method, OrderBy,
    Orientation, Pagination, PhotoOpt, PhotoQuery, ProfileImageOpt, RATE_LIMIT_HEADER,
    RATE_LIMIT_REMAINING_HEADER, RandomPhotoOpt, RateLimit, Request, RequestBuilder, Response,
    Result, SUCCESS_STATUSES, SearchOpt, StatsOpt, UserUpdateInfo,
};

// Re-export http types for status codes and headers
pub use unsplash_core::{HeaderMap, StatusCode, header};

pub use url::Url;
