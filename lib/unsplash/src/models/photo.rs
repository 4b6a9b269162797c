use serde::{Deserialize, Serialize};
use url::Url;

use super::{Collection, User};

/// A photo.
///
/// Listing endpoints return a subset of the fields; fetch the photo by id for
/// the full record (EXIF, location, tags).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    /// Photo id.
    pub id: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Dominant color as `#rrggbb`.
    pub color: Option<String>,
    /// BlurHash placeholder.
    pub blur_hash: Option<String>,
    /// Author description.
    pub description: Option<String>,
    /// Generated description.
    pub alt_description: Option<String>,
    /// View count.
    pub views: Option<u64>,
    /// Download count.
    pub downloads: Option<u64>,
    /// Like count.
    pub likes: Option<u64>,
    /// Liked by the authenticated user.
    pub liked_by_user: Option<bool>,
    /// Camera settings.
    pub exif: Option<ExifData>,
    /// Photographer.
    pub user: Option<User>,
    /// Where the photo was taken.
    pub location: Option<PhotoLocation>,
    /// Tags.
    pub tags: Option<Vec<Tag>>,
    /// Collections of the authenticated user holding this photo.
    pub current_user_collections: Option<Vec<Collection>>,
    /// Image URLs.
    pub urls: Option<PhotoUrls>,
    /// API and HTML links.
    pub links: Option<PhotoLinks>,
}

/// Camera settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExifData {
    /// Camera maker.
    pub make: Option<String>,
    /// Camera model.
    pub model: Option<String>,
    /// Exposure time, e.g. `1/100`.
    pub exposure_time: Option<String>,
    /// Aperture, e.g. `4.5`.
    pub aperture: Option<String>,
    /// Focal length in mm.
    pub focal_length: Option<String>,
    /// ISO speed.
    pub iso: Option<u32>,
}

/// A photo tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    /// Tag kind, e.g. `search`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Tag text.
    pub title: Option<String>,
}

/// Where a photo was taken.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PhotoLocation {
    /// Display title.
    pub title: Option<String>,
    /// Place name.
    pub name: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Coordinates.
    pub position: Option<Position>,
}

/// GPS coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Position {
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
}

/// Image renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoUrls {
    /// Original file.
    pub raw: Option<Url>,
    /// Largest JPEG.
    pub full: Option<Url>,
    /// 1080px wide.
    pub regular: Option<Url>,
    /// 400px wide.
    pub small: Option<Url>,
    /// 200px wide.
    pub thumb: Option<Url>,
    /// Present when a size or crop was requested.
    pub custom: Option<Url>,
}

/// Links attached to a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoLinks {
    /// API location.
    #[serde(rename = "self")]
    pub self_link: Option<Url>,
    /// Web page.
    pub html: Option<Url>,
    /// Direct download.
    pub download: Option<Url>,
    /// Endpoint to hit when the photo is actually downloaded.
    pub download_location: Option<Url>,
}

/// Legacy counters from `photos/:id/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoStats {
    /// Download count.
    #[serde(default)]
    pub downloads: u64,
    /// Like count.
    #[serde(default)]
    pub likes: u64,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Links.
    pub links: Option<PhotoLinks>,
}

/// Body of `photos/:id/download` and `users/:username/portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UrlResponse {
    /// Target URL.
    pub url: Url,
}

/// Body of a like or unlike.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LikedPhoto {
    /// The photo, with `liked_by_user` updated.
    pub photo: Option<Photo>,
    /// The authenticated user.
    pub user: Option<User>,
}
