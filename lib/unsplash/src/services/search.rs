use serde::de::DeserializeOwned;

use crate::models::{Collection, Photo, SearchResult, User};
use crate::{Endpoint, HttpClient, Method, Response, Result, SearchOpt, Unsplash};

/// `search` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a, C> {
    client: &'a Unsplash<C>,
}

impl<'a, C: HttpClient> SearchService<'a, C> {
    pub(crate) const fn new(client: &'a Unsplash<C>) -> Self {
        Self { client }
    }

    async fn search<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        opt: &SearchOpt,
    ) -> Result<(SearchResult<T>, Response)> {
        let mut opt = opt.clone();
        opt.validate()?;
        self.client
            .fetch(Method::Get, endpoint.path(), Some(&opt))
            .await
    }

    /// Users matching the query.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for an empty query or bad paging,
    /// then request errors.
    pub async fn users(&self, opt: &SearchOpt) -> Result<(SearchResult<User>, Response)> {
        self.search(Endpoint::SearchUsers, opt).await
    }

    /// Photos matching the query.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for an empty query or bad paging,
    /// then request errors.
    pub async fn photos(&self, opt: &SearchOpt) -> Result<(SearchResult<Photo>, Response)> {
        self.search(Endpoint::SearchPhotos, opt).await
    }

    /// Collections matching the query.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for an empty query or bad paging,
    /// then request errors.
    pub async fn collections(
        &self,
        opt: &SearchOpt,
    ) -> Result<(SearchResult<Collection>, Response)> {
        self.search(Endpoint::SearchCollections, opt).await
    }
}
