use url::Url;

use super::{list_opt, non_empty};
use crate::models::{LikedPhoto, Photo, PhotoStats, Statistics, UrlResponse};
use crate::unsplash::NONE;
use crate::{
    Endpoint, HttpClient, ListOpt, Method, PhotoOpt, RandomPhotoOpt, Response, Result, StatsOpt,
    Unsplash,
};

/// `photos` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PhotosService<'a, C> {
    client: &'a Unsplash<C>,
}

impl<'a, C: HttpClient> PhotosService<'a, C> {
    pub(crate) const fn new(client: &'a Unsplash<C>) -> Self {
        Self { client }
    }

    /// A single photo, optionally resized or cropped.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id,
    /// [`crate::Error::InvalidOptions`] for a bad size, then request errors.
    pub async fn photo(&self, id: &str, opt: Option<&PhotoOpt>) -> Result<(Photo, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?])?;
        let query = opt
            .map(|opt| opt.validate().map(|()| opt.to_query()))
            .transpose()?;
        self.client.fetch(Method::Get, &path, query.as_ref()).await
    }

    /// Download, view and like totals of a photo.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id, then request errors.
    pub async fn stats(&self, id: &str) -> Result<(PhotoStats, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?, "stats"])?;
        self.client.fetch(Method::Get, &path, NONE).await
    }

    /// History of a photo's counters, 30 days unless told otherwise.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id,
    /// [`crate::Error::InvalidOptions`] for a bad window, then request errors.
    pub async fn statistics(
        &self,
        id: &str,
        opt: Option<&StatsOpt>,
    ) -> Result<(Statistics, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?, "statistics"])?;
        let mut opt = opt.cloned().unwrap_or_default();
        opt.validate()?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// Link to the original file. Fetching it counts as a download.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id, then request errors.
    pub async fn download_link(&self, id: &str) -> Result<(Url, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?, "download"])?;
        let (link, response): (UrlResponse, _) =
            self.client.fetch(Method::Get, &path, NONE).await?;
        Ok((link.url, response))
    }

    /// One page of the editorial feed.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn all(&self, opt: Option<&ListOpt>) -> Result<(Vec<Photo>, Response)> {
        let opt = list_opt(opt)?;
        self.client
            .fetch(Method::Get, Endpoint::Photos.path(), Some(&opt))
            .await
    }

    /// One page of curated photos.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn curated(&self, opt: Option<&ListOpt>) -> Result<(Vec<Photo>, Response)> {
        let opt = list_opt(opt)?;
        let path = Endpoint::Photos.join(["curated"])?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// Random photos matching the filters, one unless `count` says otherwise.
    ///
    /// The API answers with an array whenever `count` is sent, which is
    /// always the case here.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidOptions`] for contradictory filters, then
    /// request errors.
    pub async fn random(&self, opt: Option<&RandomPhotoOpt>) -> Result<(Vec<Photo>, Response)> {
        let mut opt = opt.cloned().unwrap_or_default();
        opt.validate()?;
        let path = Endpoint::Photos.join(["random"])?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// Like a photo as the authenticated user.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id, then request errors.
    pub async fn like(&self, id: &str) -> Result<(LikedPhoto, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?, "like"])?;
        self.client.fetch(Method::Post, &path, NONE).await
    }

    /// Remove the authenticated user's like.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty id, then request errors.
    pub async fn unlike(&self, id: &str) -> Result<(LikedPhoto, Response)> {
        let path = Endpoint::Photos.join([non_empty(id, "photo id")?, "like"])?;
        self.client.fetch(Method::Delete, &path, NONE).await
    }
}
