use serde::{Deserialize, Serialize};
use url::Url;

use super::Photo;

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    /// Opaque id.
    pub id: Option<String>,
    /// Legacy numeric id.
    pub numeric_id: Option<u64>,
    /// Handle.
    pub username: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Only present on `me`.
    pub email: Option<String>,
    /// Onboarding done (authenticated user only).
    pub completed_onboarding: Option<bool>,
    /// Personal site.
    pub portfolio_url: Option<Url>,
    /// Biography.
    pub bio: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Instagram handle.
    pub instagram_username: Option<String>,
    /// Twitter handle.
    pub twitter_username: Option<String>,
    /// Photos liked.
    pub total_likes: Option<u64>,
    /// Photos uploaded.
    pub total_photos: Option<u64>,
    /// Collections owned.
    pub total_collections: Option<u64>,
    /// Followed by the authenticated user.
    pub followed_by_user: Option<bool>,
    /// Follower count.
    pub followers_count: Option<u64>,
    /// Following count.
    pub following_count: Option<u64>,
    /// Downloads of this user's photos.
    pub downloads: Option<u64>,
    /// Avatar renditions.
    pub profile_image: Option<ProfileImage>,
    /// Badge shown next to the name.
    pub badge: Option<UserBadge>,
    /// API and HTML links.
    pub links: Option<UserLinks>,
    /// A few recent photos, on public profiles.
    pub photos: Option<Vec<Photo>>,
}

/// Avatar renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileImage {
    /// 32px.
    pub small: Option<Url>,
    /// 64px.
    pub medium: Option<Url>,
    /// 128px.
    pub large: Option<Url>,
    /// Requested with a profile image size.
    pub custom: Option<Url>,
}

/// Links attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserLinks {
    /// API location.
    #[serde(rename = "self")]
    pub self_link: Option<Url>,
    /// Profile page.
    pub html: Option<Url>,
    /// Uploaded photos.
    pub photos: Option<Url>,
    /// Liked photos.
    pub likes: Option<Url>,
    /// Portfolio redirect.
    pub portfolio: Option<Url>,
    /// Followers.
    pub followers: Option<Url>,
    /// Following.
    pub following: Option<Url>,
}

/// Profile badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserBadge {
    /// Badge text.
    pub title: Option<String>,
    /// Main badge of the user.
    pub primary: Option<bool>,
    /// Identifier.
    pub slug: Option<String>,
    /// Badge page.
    pub link: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_user_with_links() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "pXhwzz1JtQU",
                "username": "jimmyexample",
                "name": "James Example",
                "portfolio_url": null,
                "total_likes": 5,
                "profile_image": {"small": "https://images.unsplash.com/profile-1?w=32"},
                "badge": {"title": "Book contributor", "primary": true, "slug": "book-contributor"},
                "links": {
                    "self": "https://api.unsplash.com/users/jimmyexample",
                    "html": "https://unsplash.com/jimmyexample"
                }
            }"#,
        )
        .expect("user");

        assert_eq!(user.username.as_deref(), Some("jimmyexample"));
        assert_eq!(user.total_likes, Some(5));
        assert!(user.portfolio_url.is_none());
        assert_eq!(user.badge.and_then(|badge| badge.primary), Some(true));
        assert!(
            user.links
                .and_then(|links| links.html)
                .is_some_and(|html| html.host_str() == Some("unsplash.com"))
        );
    }
}
