use serde::Serialize;

use super::{list_opt, non_empty, non_zero};
use crate::models::Collection;
use crate::unsplash::NONE;
use crate::{
    CollectionOpt, Endpoint, Error, HttpClient, ListOpt, Method, Response, Result, Unsplash,
};

#[derive(Serialize)]
struct PhotoRef<'a> {
    photo_id: &'a str,
}

/// `collections` endpoints.
///
/// Writes need a bearer token with the `write_collections` scope.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsService<'a, C> {
    client: &'a Unsplash<C>,
}

impl<'a, C: HttpClient> CollectionsService<'a, C> {
    pub(crate) const fn new(client: &'a Unsplash<C>) -> Self {
        Self { client }
    }

    async fn list(
        &self,
        path: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Collection>, Response)> {
        let opt = list_opt(opt)?;
        self.client.fetch(Method::Get, path, Some(&opt)).await
    }

    /// One page of all collections.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn all(&self, opt: Option<&ListOpt>) -> Result<(Vec<Collection>, Response)> {
        self.list(Endpoint::Collections.path(), opt).await
    }

    /// One page of featured collections.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn featured(&self, opt: Option<&ListOpt>) -> Result<(Vec<Collection>, Response)> {
        self.list(&Endpoint::Collections.join(["featured"])?, opt)
            .await
    }

    /// One page of curated collections.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn curated(&self, opt: Option<&ListOpt>) -> Result<(Vec<Collection>, Response)> {
        self.list(&Endpoint::Collections.join(["curated"])?, opt)
            .await
    }

    /// Collections related to `id`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for an empty id, [`Error::InvalidOptions`]
    /// for bad paging, then request errors.
    pub async fn related(
        &self,
        id: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Collection>, Response)> {
        let path = Endpoint::Collections.join([non_empty(id, "collection id")?, "related"])?;
        self.list(&path, opt).await
    }

    /// A single collection.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for an empty id, then request errors.
    pub async fn collection(&self, id: &str) -> Result<(Collection, Response)> {
        let path = Endpoint::Collections.join([non_empty(id, "collection id")?])?;
        self.client.fetch(Method::Get, &path, NONE).await
    }

    /// Create a collection. The server must answer `201 Created`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] without a title,
    /// [`Error::UnexpectedStatus`] for any other success code, then request
    /// errors.
    pub async fn create(&self, opt: &CollectionOpt) -> Result<(Collection, Response)> {
        if opt.title.as_deref().is_none_or(str::is_empty) {
            return Err(Error::illegal_argument(
                "a title is required to create a collection",
            ));
        }

        let response = self
            .client
            .request(Method::Post, Endpoint::Collections.path(), Some(opt), NONE)
            .await?;
        response.expect_status(201)?;
        let collection = response.json()?;
        Ok((collection, response))
    }

    /// Change the title, description or visibility of a collection.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for a zero id, then request errors.
    pub async fn update(&self, id: u64, opt: &CollectionOpt) -> Result<(Collection, Response)> {
        let path = Endpoint::Collections.join([non_zero(id, "collection id")?])?;
        self.client.fetch(Method::Put, &path, Some(opt)).await
    }

    /// Delete a collection. The server must answer `204 No Content`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for a zero id, [`Error::UnexpectedStatus`]
    /// for any other success code, then request errors.
    pub async fn delete(&self, id: u64) -> Result<Response> {
        let path = Endpoint::Collections.join([non_zero(id, "collection id")?])?;
        let response = self
            .client
            .request(Method::Delete, &path, NONE, NONE)
            .await?;
        response.expect_status(204)?;
        Ok(response)
    }

    /// Add a photo to a collection. The server must answer `201 Created`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for a zero or empty id,
    /// [`Error::UnexpectedStatus`] for any other success code, then request
    /// errors.
    pub async fn add_photo(&self, collection_id: u64, photo_id: &str) -> Result<Response> {
        let id = non_zero(collection_id, "collection id")?;
        let path = Endpoint::Collections.join([id.as_str(), "add"])?;
        let query = PhotoRef {
            photo_id: non_empty(photo_id, "photo id")?,
        };
        let response = self
            .client
            .request(Method::Post, &path, Some(&query), NONE)
            .await?;
        response.expect_status(201)?;
        Ok(response)
    }

    /// Remove a photo from a collection. The server must answer `200 OK`.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for a zero or empty id,
    /// [`Error::UnexpectedStatus`] for any other success code, then request
    /// errors.
    pub async fn remove_photo(&self, collection_id: u64, photo_id: &str) -> Result<Response> {
        let id = non_zero(collection_id, "collection id")?;
        let path = Endpoint::Collections.join([id.as_str(), "remove"])?;
        let query = PhotoRef {
            photo_id: non_empty(photo_id, "photo id")?,
        };
        let response = self
            .client
            .request(Method::Delete, &path, Some(&query), NONE)
            .await?;
        response.expect_status(200)?;
        Ok(response)
    }
}
