//! Hyper transport.
//!
//! [`HyperClient`] is the default [`crate::HttpClient`]: a pooled
//! hyper-util client over rustls, wrapped in an optional stack of tower
//! layers. It sends each request exactly once and buffers the whole body
//! before handing the response back.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::{
    Error, HttpResponse, Request, Result,
    config::{ClientConfig, ClientConfigBuilder},
    connector::https_connector,
    middleware::{BearerAuthLayer, LoggingLayer},
};

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Request, HttpResponse, Error>;

/// Future type for the tower `Service` implementation.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send + 'static>>;

// BoxCloneService is Send but not Sync; HttpClient needs both.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request) -> ServiceFuture {
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

/// Innermost service: one hyper round trip.
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: Duration,
}

impl RawHyperClient {
    fn new(config: &ClientConfig) -> Self {
        let connector = https_connector(config.connect_timeout);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self {
            inner,
            timeout: config.timeout,
        }
    }

    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    async fn execute(&self, request: Request) -> Result<HttpResponse> {
        let hyper_request = Self::build_hyper_request(request)?;
        let timeout = self.timeout;

        // The deadline covers the body as well, the response is only complete once drained.
        tokio::time::timeout(timeout, async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let (parts, body) = response.into_parts();
            let body = body
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>(HttpResponse::new(parts.status.as_u16(), parts.headers, body))
        })
        .await
        .map_err(|_| Error::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = format!("{err:?}");
        let lower = msg.to_lowercase();

        if lower.contains("ssl") || lower.contains("tls") || lower.contains("certificate") {
            return Error::tls(err.to_string());
        }

        Error::connection(err.to_string())
    }
}

impl Service<Request> for RawHyperClient {
    type Response = HttpResponse;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

/// HTTP client using hyper-util with connection pooling, TLS, and middleware support.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use unsplash::HyperClient;
///
/// let client = HyperClient::builder()
///     .timeout(Duration::from_secs(10))
///     .with_bearer_auth("user-access-token")
///     .with_logging()
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration (no middleware).
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let raw = RawHyperClient::new(&config);
        Self::with_service(BoxCloneService::new(raw), config)
    }

    fn with_service(service: BoxedService, config: ClientConfig) -> Self {
        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<HttpResponse> {
        self.service.call(request).await
    }
}

impl Service<Request> for HyperClient {
    type Response = HttpResponse;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperClient`].
///
/// Each layer wraps everything added before it, so the last layer added sees
/// the request first.
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
    use_defaults: bool,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .field("use_defaults", &self.use_defaults)
            .finish()
    }
}

impl HyperClientBuilder {
    /// Set the request timeout, covering headers and body.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Replace the whole transport configuration.
    #[must_use]
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.config = ClientConfigBuilder::from(config);
        self
    }

    /// Add a tower layer to the client.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = HttpResponse, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Wrap the transport in info-level logging before any user layer.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.use_defaults = true;
        self
    }

    /// User-level access: send `Authorization: Bearer <token>` on every request.
    ///
    /// Do not combine with a client id on the [`crate::Unsplash`] value.
    #[must_use]
    pub fn with_bearer_auth(self, token: impl Into<String>) -> Self {
        self.layer(BearerAuthLayer::new(token))
    }

    /// Add request/response logging.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add debug-level logging (includes header names).
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    /// Build the client with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();
        let mut service: BoxedService = BoxCloneService::new(RawHyperClient::new(&config));

        if self.use_defaults {
            service = BoxCloneService::new(LoggingLayer::new().layer(service));
        }

        for layer_fn in self.layers {
            service = layer_fn(service);
        }

        HyperClient::with_service(service, config)
    }
}
