//! Prelude module for convenient imports.
//!
//! ```
//! use unsplash::prelude::*;
//! ```

pub use crate::models::{Collection, Photo, SearchResult, User};
pub use crate::{
    ClientConfig, CollectionOpt, Error, HttpClient, HyperClient, ListOpt, OrderBy, Pagination,
    PhotoOpt, RandomPhotoOpt, RateLimit, Response, Result, SearchOpt, StatsOpt, Unsplash,
};
