//! Request/response logging middleware.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, HttpResponse, Request, Result};

/// Layer that adds request/response logging.
///
/// Header values are never logged; they carry credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Request line plus header names and rate-limit counters.
    Debug,
    /// Summary only.
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// Configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

impl<S> Logging<S> {
    /// Create a new logging service wrapping the given service.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            level: LogLevel::Info,
        }
    }
}

impl<S> Service<Request> for Logging<S>
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

    fn call(&mut self, request: Request) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "unsplash_request", %method, %url);

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();

                match level {
                    LogLevel::Debug => {
                        let mut headers: Vec<&str> =
                            request.headers().keys().map(String::as_str).collect();
                        headers.sort_unstable();
                        debug!(method = %method, url = %url, ?headers, "sending request");
                    }
                    LogLevel::Info => {
                        info!(method = %method, url = %url, "sending request");
                    }
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) => {
                        let status = response.status();
                        if response.is_success() {
                            info!(status, elapsed_ms, "request completed");
                        } else {
                            warn!(status, elapsed_ms, "request failed with HTTP error");
                        }
                        if level == LogLevel::Debug {
                            let rate_limit = crate::RateLimit::from_headers(response.headers());
                            debug!(
                                limit = rate_limit.limit(),
                                remaining = rate_limit.remaining(),
                                body_len = response.body().len(),
                                "response received"
                            );
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}
