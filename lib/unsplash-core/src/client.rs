//! HTTP client trait.
//!
//! [`HttpClient`] is the seam between the protocol layer and the network.
//! The `unsplash` crate ships a hyper implementation; tests and callers with
//! special needs (proxies, custom auth, recorded fixtures) can provide their
//! own.

use std::future::Future;

use crate::{HttpResponse, Request, Result};

/// Core HTTP client trait.
///
/// One call to [`HttpClient::execute`] is one round trip. Implementations
/// must not retry and must read the whole body before resolving, so the
/// underlying connection can be reused.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns the transport failure unchanged:
    /// - [`crate::Error::Connection`] for network errors
    /// - [`crate::Error::Tls`] for handshake failures
    /// - [`crate::Error::Timeout`] when the client's own timeout elapses
    fn execute(&self, request: Request) -> impl Future<Output = Result<HttpResponse>> + Send;
}
