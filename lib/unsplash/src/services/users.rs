use url::Url;

use super::{list_opt, non_empty};
use crate::models::{Collection, Photo, Statistics, UrlResponse, User};
use crate::unsplash::NONE;
use crate::{
    Endpoint, HttpClient, ListOpt, Method, ProfileImageOpt, Response, Result, StatsOpt, Unsplash,
};

/// `users` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a, C> {
    client: &'a Unsplash<C>,
}

impl<'a, C: HttpClient> UsersService<'a, C> {
    pub(crate) const fn new(client: &'a Unsplash<C>) -> Self {
        Self { client }
    }

    fn path(username: &str, resource: Option<&str>) -> Result<String> {
        let username = non_empty(username, "username")?;
        Endpoint::Users.join([Some(username), resource].into_iter().flatten())
    }

    /// Public profile of `username`, with a custom profile image size.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username, then request
    /// errors.
    pub async fn user(
        &self,
        username: &str,
        opt: Option<&ProfileImageOpt>,
    ) -> Result<(User, Response)> {
        let path = Self::path(username, None)?;
        self.client.fetch(Method::Get, &path, opt).await
    }

    /// Portfolio link of `username`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username, then request
    /// errors.
    pub async fn portfolio(&self, username: &str) -> Result<(Url, Response)> {
        let path = Self::path(username, Some("portfolio"))?;
        let (link, response): (UrlResponse, _) =
            self.client.fetch(Method::Get, &path, NONE).await?;
        Ok((link.url, response))
    }

    /// Photos uploaded by `username`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username,
    /// [`crate::Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn photos(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Photo>, Response)> {
        let path = Self::path(username, Some("photos"))?;
        let opt = list_opt(opt)?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// Photos liked by `username`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username,
    /// [`crate::Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn liked_photos(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Photo>, Response)> {
        let path = Self::path(username, Some("likes"))?;
        let opt = list_opt(opt)?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// Collections created by `username`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username,
    /// [`crate::Error::InvalidOptions`] for bad paging, then request errors.
    pub async fn collections(
        &self,
        username: &str,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<Collection>, Response)> {
        let path = Self::path(username, Some("collections"))?;
        let opt = list_opt(opt)?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }

    /// History of the counters of `username`, 30 days unless told otherwise.
    ///
    /// # Errors
    ///
    /// [`crate::Error::IllegalArgument`] for an empty username,
    /// [`crate::Error::InvalidOptions`] for a bad window, then request errors.
    pub async fn statistics(
        &self,
        username: &str,
        opt: Option<&StatsOpt>,
    ) -> Result<(Statistics, Response)> {
        let path = Self::path(username, Some("statistics"))?;
        let mut opt = opt.cloned().unwrap_or_default();
        opt.validate()?;
        self.client.fetch(Method::Get, &path, Some(&opt)).await
    }
}
