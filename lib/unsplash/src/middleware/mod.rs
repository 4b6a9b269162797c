//! Tower middleware layers for [`crate::HyperClient`].
//!
//! Layers wrap the transport service (`Request` in, `HttpResponse` out) and
//! are added through [`crate::HyperClientBuilder::layer`] or the helper
//! methods. The last layer added is the first to see a request.
//!
//! - [`BearerAuthLayer`] adds `Authorization: Bearer <token>` (user-level access)
//! - [`LoggingLayer`] logs requests and responses with `tracing`
//!
//! ```no_run
//! use unsplash::HyperClient;
//! use unsplash::middleware::BearerAuthLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(BearerAuthLayer::new("user-access-token"))
//!     .with_logging()
//!     .build();
//! ```

mod bearer_auth;
mod logging;

pub use bearer_auth::{BearerAuth, BearerAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::{Layer, ServiceBuilder};
