use serde::{Deserialize, Serialize};
use url::Url;

use super::{Photo, User};

/// A collection of photos.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    /// Numeric id.
    pub id: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// ISO 8601 publication timestamp.
    pub published_at: Option<String>,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
    /// Curated by the Unsplash team.
    pub curated: Option<bool>,
    /// Featured.
    pub featured: Option<bool>,
    /// Number of photos.
    pub total_photos: Option<u64>,
    /// Hidden from other users.
    pub private: Option<bool>,
    /// Sharing key of a private collection.
    pub share_key: Option<String>,
    /// Cover.
    pub cover_photo: Option<Photo>,
    /// Owner.
    pub user: Option<User>,
    /// API and HTML links.
    pub links: Option<CollectionLinks>,
}

/// Links attached to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectionLinks {
    /// API location.
    #[serde(rename = "self")]
    pub self_link: Option<Url>,
    /// Web page.
    pub html: Option<Url>,
    /// Photos in the collection.
    pub photos: Option<Url>,
    /// Related collections.
    pub related: Option<Url>,
}
