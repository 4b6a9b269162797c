//! Bearer token authentication middleware.
//!
//! User-level access to the API goes through an OAuth access token. The token
//! is obtained and refreshed elsewhere; this layer only attaches it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Error, HttpResponse, Request, Result};

/// Layer that adds bearer token authentication to requests.
///
/// # Example
///
/// ```no_run
/// use unsplash::HyperClient;
/// use unsplash::middleware::BearerAuthLayer;
///
/// let client = HyperClient::builder()
///     .layer(BearerAuthLayer::new("user-access-token"))
///     .build();
/// ```
#[derive(Clone)]
pub struct BearerAuthLayer {
    token: Arc<str>,
}

impl std::fmt::Debug for BearerAuthLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuthLayer").finish_non_exhaustive()
    }
}

impl BearerAuthLayer {
    /// Create a new bearer auth layer with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// Service that adds bearer token authentication to requests.
#[derive(Clone)]
pub struct BearerAuth<S> {
    inner: S,
    token: Arc<str>,
}

impl<S> std::fmt::Debug for BearerAuth<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}

impl<S> BearerAuth<S> {
    /// Create a new bearer auth service wrapping the given service.
    pub fn new(inner: S, token: impl Into<String>) -> Self {
        Self {
            inner,
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Service<Request> for BearerAuth<S>
where
    S: Service<Request, Response = HttpResponse, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = HttpResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        request.headers_mut().insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        );

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}
