//! The top-level client.
//!
//! [`Unsplash`] pairs an [`HttpClient`] with an immutable base URL and an
//! optional application id. Every call goes through the same pipeline:
//! validate options, build the request, send it once, classify the response.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;
use url::Url;

use crate::models::{GlobalStats, MonthStats, User};
use crate::services::{CollectionsService, PhotosService, SearchService, UsersService};
use crate::{
    DEFAULT_BASE_URL, Endpoint, Error, HttpClient, HyperClient, Method, Request, Response, Result,
    UserUpdateInfo,
};

/// Stand-in for an absent query or body.
pub(crate) const NONE: Option<&()> = None;

/// Client for the Unsplash API.
///
/// Authentication is one of:
/// - application level: [`Unsplash::with_client_id`] sends
///   `Authorization: Client-ID <id>` on every request
/// - user level: an HTTP client that injects a bearer token, e.g.
///   `HyperClient::builder().with_bearer_auth(token)`
///
/// The client never combines the two.
///
/// # Example
///
/// ```no_run
/// use unsplash::{HyperClient, Unsplash};
///
/// # async fn run() -> unsplash::Result<()> {
/// let unsplash = Unsplash::with_client_id(HyperClient::new(), "my-access-key");
/// let (photos, response) = unsplash.photos().all(None).await?;
/// println!("{} photos, next page {}", photos.len(), response.pagination().next);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Unsplash<C = HyperClient> {
    client: C,
    base_url: Url,
    client_id: Option<Arc<str>>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for Unsplash<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsplash")
            .field("client", &self.client)
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.client_id.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Unsplash<HyperClient> {
    fn default() -> Self {
        Self::new(HyperClient::new())
    }
}

impl Unsplash<HyperClient> {
    /// Builder for base URL and client id.
    #[must_use]
    pub fn builder() -> UnsplashBuilder {
        UnsplashBuilder::default()
    }
}

impl<C: HttpClient> Unsplash<C> {
    /// Client against the production API, relying on `client` for auth.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_url: default_base_url(),
            client_id: None,
        }
    }

    /// Client against the production API with application-level access.
    ///
    /// An empty id is the same as none.
    #[must_use]
    pub fn with_client_id(client: C, client_id: impl Into<String>) -> Self {
        Self {
            client_id: non_empty_id(client_id.into()),
            ..Self::new(client)
        }
    }

    /// API root every endpoint path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Application id, if any.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &C {
        &self.client
    }

    /// Send a request once and classify the answer.
    ///
    /// Adds `Authorization: Client-ID <id>` when an application id is set.
    ///
    /// # Errors
    ///
    /// Transport errors from the HTTP client, unchanged, or the status-driven
    /// errors of [`Response::classify`].
    pub async fn execute(&self, mut request: Request) -> Result<Response> {
        if let Some(client_id) = &self.client_id {
            request
                .headers_mut()
                .insert("Authorization".to_string(), format!("Client-ID {client_id}"));
        }

        trace!(method = %request.method(), url = %request.url(), "executing request");
        let raw = self.client.execute(request).await?;
        Response::classify(raw)
    }

    /// Build and send a request for `path`, relative to the base URL.
    ///
    /// # Errors
    ///
    /// Argument and serialization errors before any I/O, then anything from
    /// [`Unsplash::execute`].
    pub async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response>
    where
        Q: Serialize + ?Sized + Sync,
        B: Serialize + ?Sized + Sync,
    {
        let request = Request::api(&self.base_url, method, path, query, body)?;
        self.execute(request).await
    }

    /// [`Unsplash::request`] without body, decoding the JSON answer.
    ///
    /// # Errors
    ///
    /// Same as [`Unsplash::request`], plus [`Error::JsonDeserialization`].
    pub async fn fetch<T, Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let response = self.request(method, path, query, NONE).await?;
        let value = response.json()?;
        Ok((value, response))
    }

    /// The authenticated user. Needs user-level access.
    ///
    /// # Errors
    ///
    /// See [`Unsplash::fetch`].
    pub async fn current_user(&self) -> Result<(User, Response)> {
        self.fetch(Method::Get, Endpoint::CurrentUser.path(), NONE)
            .await
    }

    /// Update private fields of the authenticated user.
    ///
    /// Only non-empty fields are sent.
    ///
    /// # Errors
    ///
    /// See [`Unsplash::fetch`].
    pub async fn update_current_user(&self, info: &UserUpdateInfo) -> Result<(User, Response)> {
        self.fetch(Method::Put, Endpoint::CurrentUser.path(), Some(info))
            .await
    }

    /// Platform totals.
    ///
    /// # Errors
    ///
    /// See [`Unsplash::fetch`].
    pub async fn total_stats(&self) -> Result<(GlobalStats, Response)> {
        self.fetch(Method::Get, Endpoint::GlobalStats.path(), NONE)
            .await
    }

    /// Alias for [`Unsplash::total_stats`].
    ///
    /// # Errors
    ///
    /// See [`Unsplash::fetch`].
    pub async fn stats(&self) -> Result<(GlobalStats, Response)> {
        self.total_stats().await
    }

    /// Totals for the last 30 days.
    ///
    /// # Errors
    ///
    /// See [`Unsplash::fetch`].
    pub async fn month_stats(&self) -> Result<(MonthStats, Response)> {
        self.fetch(Method::Get, Endpoint::MonthStats.path(), NONE)
            .await
    }

    /// `photos` endpoints.
    #[must_use]
    pub const fn photos(&self) -> PhotosService<'_, C> {
        PhotosService::new(self)
    }

    /// `collections` endpoints.
    #[must_use]
    pub const fn collections(&self) -> CollectionsService<'_, C> {
        CollectionsService::new(self)
    }

    /// `users` endpoints.
    #[must_use]
    pub const fn users(&self) -> UsersService<'_, C> {
        UsersService::new(self)
    }

    /// `search` endpoints.
    #[must_use]
    pub const fn search(&self) -> SearchService<'_, C> {
        SearchService::new(self)
    }
}

/// Builder for [`Unsplash`].
///
/// ```
/// use unsplash::Unsplash;
///
/// let unsplash = Unsplash::builder()
///     .base_url("http://127.0.0.1:8080/api")
///     .client_id("my-access-key")
///     .build()
///     .expect("valid base URL");
/// assert_eq!(unsplash.base_url().as_str(), "http://127.0.0.1:8080/api/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnsplashBuilder {
    base_url: Option<String>,
    client_id: Option<String>,
}

impl UnsplashBuilder {
    /// API root, defaults to `https://api.unsplash.com/`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Application id sent as `Authorization: Client-ID <id>`.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Build with a default [`HyperClient`].
    ///
    /// # Errors
    ///
    /// See [`UnsplashBuilder::build_with`].
    pub fn build(self) -> Result<Unsplash<HyperClient>> {
        self.build_with(HyperClient::new())
    }

    /// Build around the given HTTP client.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the base URL does not parse
    /// - [`Error::IllegalArgument`] if it cannot serve as a base (`mailto:`)
    pub fn build_with<C: HttpClient>(self, client: C) -> Result<Unsplash<C>> {
        let base_url = match self.base_url {
            Some(raw) => parse_base_url(&raw)?,
            None => default_base_url(),
        };

        Ok(Unsplash {
            client,
            base_url,
            client_id: self.client_id.and_then(non_empty_id),
        })
    }
}

fn non_empty_id(client_id: String) -> Option<Arc<str>> {
    (!client_id.is_empty()).then(|| Arc::from(client_id))
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

// Endpoint paths are joined onto the base, which only keeps its last path
// segment when it ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(Error::illegal_argument(format!(
            "'{raw}' cannot be used as a base URL"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
