//! Decode targets for API responses.
//!
//! The API omits fields freely depending on the endpoint and the caller's
//! scopes, so almost every field is optional.

mod collection;
mod photo;
mod search;
mod stats;
mod user;

pub use collection::{Collection, CollectionLinks};
pub use photo::{
    ExifData, LikedPhoto, Photo, PhotoLinks, PhotoLocation, PhotoStats, PhotoUrls, Position, Tag,
    UrlResponse,
};
pub use search::SearchResult;
pub use stats::{GlobalStats, Historical, HistoricalValue, Metric, MonthStats, Statistics};
pub use user::{ProfileImage, User, UserBadge, UserLinks};
