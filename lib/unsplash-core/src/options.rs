//! Query options for listing, search and photo endpoints.
//!
//! Every option type normalizes itself in place before a request is built:
//! unset (zero) fields receive their defaults, then the values are checked.
//! A failed check is reported as [`Error::InvalidOptions`] and no request
//! leaves the process. Validation is idempotent.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result, comma_separated};

/// Default page for listings.
pub const DEFAULT_PAGE: i32 = 1;

/// Default page size for listings.
pub const DEFAULT_PER_PAGE: i32 = 10;

/// Largest window accepted by the statistics endpoints, in days.
pub const MAX_STATS_QUANTITY: i32 = 30;

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Oldest,
    /// Most popular first.
    Popular,
}

impl OrderBy {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "latest" => Ok(Self::Latest),
            "oldest" => Ok(Self::Oldest),
            "popular" => Ok(Self::Popular),
            other => Err(Error::invalid_options(format!(
                "order_by must be one of latest, oldest or popular, got '{other}'"
            ))),
        }
    }
}

fn normalize_paging(page: &mut i32, per_page: &mut i32) -> Result<()> {
    if *page < 0 {
        return Err(Error::invalid_options(format!(
            "page cannot be negative, got {page}"
        )));
    }
    if *per_page < 0 {
        return Err(Error::invalid_options(format!(
            "per_page cannot be negative, got {per_page}"
        )));
    }
    if *page == 0 {
        *page = DEFAULT_PAGE;
    }
    if *per_page == 0 {
        *per_page = DEFAULT_PER_PAGE;
    }
    Ok(())
}

/// Pagination and ordering for listing endpoints.
///
/// ```
/// use unsplash_core::ListOpt;
///
/// let mut opt = ListOpt::default();
/// opt.validate().expect("defaults are valid");
/// assert_eq!((opt.page, opt.per_page, opt.order_by.as_str()), (1, 10, "latest"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOpt {
    /// Page number; 0 means 1.
    pub page: i32,
    /// Page size; 0 means 10.
    pub per_page: i32,
    /// One of `latest`, `oldest`, `popular`; empty means `latest`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_by: String,
}

impl ListOpt {
    /// Options with an explicit order.
    #[must_use]
    pub fn new(page: i32, per_page: i32, order_by: OrderBy) -> Self {
        Self {
            page,
            per_page,
            order_by: order_by.to_string(),
        }
    }

    /// Used when a listing call gets no options: first page, 10 items, popular.
    #[must_use]
    pub fn popular() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE, OrderBy::Popular)
    }

    /// Apply defaults, then check the values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] for a negative page or page size, or
    /// an order outside the allow-list.
    pub fn validate(&mut self) -> Result<()> {
        normalize_paging(&mut self.page, &mut self.per_page)?;
        if self.order_by.is_empty() {
            self.order_by = OrderBy::Latest.to_string();
        }
        self.order().map(|_| ())
    }

    /// Boolean form of [`ListOpt::validate`]; also normalizes.
    pub fn is_valid(&mut self) -> bool {
        self.validate().is_ok()
    }

    /// Parsed order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the order is not allow-listed.
    pub fn order(&self) -> Result<OrderBy> {
        self.order_by.parse()
    }
}

impl fmt::Display for ListOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListOpt: Page[{}], PerPage[{}], OrderBy[{}]",
            self.page, self.per_page, self.order_by
        )
    }
}

/// Search query with pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOpt {
    /// Page number; 0 means 1.
    pub page: i32,
    /// Page size; 0 means 10.
    pub per_page: i32,
    /// Free text, required.
    pub query: String,
}

impl SearchOpt {
    /// First page of results for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Check the query, then apply paging defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] when the query is empty or the
    /// paging values are negative.
    pub fn validate(&mut self) -> Result<()> {
        if self.query.is_empty() {
            return Err(Error::invalid_options("search query cannot be empty"));
        }
        normalize_paging(&mut self.page, &mut self.per_page)
    }

    /// Boolean form of [`SearchOpt::validate`]; also normalizes.
    pub fn is_valid(&mut self) -> bool {
        self.validate().is_ok()
    }
}

/// Requested rendition of a single photo.
///
/// With `crop` set the size is sent as a `rect=x,y,w,h` override instead of
/// separate `w`/`h` parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoOpt {
    /// Width in pixels, must be positive.
    pub width: i32,
    /// Height in pixels, must be positive.
    pub height: i32,
    /// Left offset of the crop.
    pub crop_x: i32,
    /// Top offset of the crop.
    pub crop_y: i32,
    /// Send a crop rectangle.
    pub crop: bool,
}

/// Query shapes accepted by the single-photo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhotoQuery {
    /// Plain resize.
    Size {
        /// Width.
        w: i32,
        /// Height.
        h: i32,
    },
    /// Crop rectangle `x,y,w,h`.
    Rect {
        /// Encoded rectangle.
        rect: String,
    },
}

impl PhotoOpt {
    /// Resize to `width` x `height`.
    #[must_use]
    pub const fn size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            crop_x: 0,
            crop_y: 0,
            crop: false,
        }
    }

    /// Crop a `width` x `height` rectangle at (`x`, `y`).
    #[must_use]
    pub const fn cropped(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            crop_x: x,
            crop_y: y,
            crop: true,
        }
    }

    /// Check the size and crop offsets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] unless width and height are positive
    /// and crop offsets non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 || self.crop_x < 0 || self.crop_y < 0 {
            return Err(Error::invalid_options(format!(
                "photo options need a positive size and non-negative crop offsets, got {}x{} at ({}, {})",
                self.width, self.height, self.crop_x, self.crop_y
            )));
        }
        Ok(())
    }

    /// Query shape sent on the wire.
    #[must_use]
    pub fn to_query(&self) -> PhotoQuery {
        if self.crop {
            PhotoQuery::Rect {
                rect: format!(
                    "{},{},{},{}",
                    self.crop_x, self.crop_y, self.width, self.height
                ),
            }
        } else {
            PhotoQuery::Size {
                w: self.width,
                h: self.height,
            }
        }
    }
}

/// Photo orientation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
    /// Roughly square.
    Squarish,
}

/// Filters for the random photo endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RandomPhotoOpt {
    /// Height.
    #[serde(skip_serializing_if = "is_zero")]
    pub h: i32,
    /// Width.
    #[serde(skip_serializing_if = "is_zero")]
    pub w: i32,
    /// Only featured photos.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    /// Only photos by this user.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Search terms.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Number of photos, 0 means 1.
    #[serde(skip_serializing_if = "is_zero")]
    pub count: i32,
    /// Orientation filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Collection ids.
    #[serde(
        serialize_with = "comma_separated",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collections: Vec<u64>,
    /// Topic ids.
    #[serde(
        serialize_with = "comma_separated",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub topics: Vec<String>,
}

impl RandomPhotoOpt {
    /// Reject impossible filters, then default the count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] for negative sizes or count, or when
    /// collections or topics are combined with a query.
    pub fn validate(&mut self) -> Result<()> {
        if self.count < 0 || self.h < 0 || self.w < 0 {
            return Err(Error::invalid_options(
                "random photo count and size cannot be negative",
            ));
        }
        if (!self.collections.is_empty() || !self.topics.is_empty()) && !self.query.is_empty() {
            return Err(Error::invalid_options(
                "collections or topics cannot be combined with a query",
            ));
        }
        if self.count == 0 {
            self.count = 1;
        }
        Ok(())
    }
}

/// Window for statistics endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsOpt {
    /// Only `days` is supported; empty means `days`.
    pub resolution: String,
    /// Number of days, 1 to 30; 0 means 30.
    pub quantity: i32,
}

impl Default for StatsOpt {
    fn default() -> Self {
        Self {
            resolution: "days".to_string(),
            quantity: MAX_STATS_QUANTITY,
        }
    }
}

impl StatsOpt {
    /// The last `quantity` days.
    #[must_use]
    pub fn days(quantity: i32) -> Self {
        Self {
            quantity,
            ..Self::default()
        }
    }

    /// Apply defaults, then check the window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] for an unknown resolution or a
    /// quantity outside 1..=30.
    pub fn validate(&mut self) -> Result<()> {
        if self.resolution.is_empty() {
            self.resolution = "days".to_string();
        }
        if self.quantity == 0 {
            self.quantity = MAX_STATS_QUANTITY;
        }
        if self.resolution != "days" {
            return Err(Error::invalid_options(format!(
                "unsupported stats resolution '{}'",
                self.resolution
            )));
        }
        if !(1..=MAX_STATS_QUANTITY).contains(&self.quantity) {
            return Err(Error::invalid_options(format!(
                "stats quantity must be between 1 and {MAX_STATS_QUANTITY}, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// Profile image size for a user lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileImageOpt {
    /// Width.
    #[serde(skip_serializing_if = "is_zero")]
    pub w: i32,
    /// Height.
    #[serde(skip_serializing_if = "is_zero")]
    pub h: i32,
}

/// Fields for creating or updating a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionOpt {
    /// Title, required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hide from other users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl CollectionOpt {
    /// Options carrying only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Private profile fields of the authenticated user. Empty fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdateInfo {
    /// Handle.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// First name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Last name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Short biography.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bio: String,
    /// Contact email.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Portfolio URL.
    #[serde(rename = "url", skip_serializing_if = "String::is_empty")]
    pub portfolio_url: String,
    /// Free-form location.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Instagram handle, without `@`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instagram_username: String,
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::to_query_string;

    #[test]
    fn list_defaults() {
        let mut opt = ListOpt::default();
        check!(opt.validate().is_ok());
        check!(opt == ListOpt::new(1, 10, OrderBy::Latest));
    }

    #[test]
    fn list_validation_is_idempotent() {
        let mut opt = ListOpt {
            page: 0,
            per_page: 25,
            order_by: String::new(),
        };
        check!(opt.is_valid());
        let normalized = opt.clone();
        check!(opt.is_valid());
        check!(opt == normalized);

        let mut bad = ListOpt {
            page: -1,
            ..ListOpt::default()
        };
        check!(!bad.is_valid());
        check!(!bad.is_valid());
        check!(bad.page == -1);
    }

    #[test]
    fn list_rejects_negative_paging() {
        for (page, per_page) in [(-1, 10), (1, -5), (-3, -3)] {
            let mut opt = ListOpt {
                page,
                per_page,
                order_by: "latest".to_string(),
            };
            let_assert!(Err(Error::InvalidOptions(_)) = opt.validate());
        }
    }

    #[test]
    fn list_order_allow_list() {
        for order in ["latest", "oldest", "popular"] {
            let mut opt = ListOpt {
                order_by: order.to_string(),
                ..ListOpt::default()
            };
            check!(opt.is_valid(), "{order} should be accepted");
            check!(opt.order().expect("allowed").as_str() == order);
        }

        let mut opt = ListOpt {
            order_by: "random".to_string(),
            ..ListOpt::default()
        };
        let_assert!(Err(Error::InvalidOptions(message)) = opt.validate());
        check!(message.contains("random"));
    }

    #[test]
    fn list_display() {
        check!(ListOpt::popular().to_string() == "ListOpt: Page[1], PerPage[10], OrderBy[popular]");
    }

    #[test]
    fn search_requires_query() {
        let mut opt = SearchOpt::default();
        let_assert!(Err(Error::InvalidOptions(message)) = opt.validate());
        check!(message == "search query cannot be empty");

        let mut opt = SearchOpt::new("nature");
        check!(opt.validate().is_ok());
        check!(opt.page == 1);
        check!(opt.per_page == 10);

        let mut opt = SearchOpt {
            page: -2,
            ..SearchOpt::new("nature")
        };
        check!(!opt.is_valid());
    }

    #[test]
    fn photo_opt_size_and_rect() {
        let opt = PhotoOpt::size(400, 300);
        check!(opt.validate().is_ok());
        check!(to_query_string(&opt.to_query()).expect("query") == "w=400&h=300");

        let opt = PhotoOpt::cropped(10, 20, 400, 300);
        check!(opt.to_query() == PhotoQuery::Rect { rect: "10,20,400,300".to_string() });
        check!(to_query_string(&opt.to_query()).expect("query") == "rect=10%2C20%2C400%2C300");
    }

    #[test]
    fn photo_opt_rejects_bad_sizes() {
        for opt in [
            PhotoOpt::size(0, 300),
            PhotoOpt::size(400, -1),
            PhotoOpt::cropped(-1, 0, 400, 300),
            PhotoOpt::default(),
        ] {
            let_assert!(Err(Error::InvalidOptions(_)) = opt.validate());
        }
    }

    #[test]
    fn random_photo_defaults_and_encoding() {
        let mut opt = RandomPhotoOpt::default();
        check!(opt.validate().is_ok());
        check!(to_query_string(&opt).expect("query") == "count=1");

        let mut opt = RandomPhotoOpt {
            featured: true,
            username: "jo".to_string(),
            count: 3,
            orientation: Some(Orientation::Squarish),
            collections: vec![1, 22],
            ..RandomPhotoOpt::default()
        };
        check!(opt.validate().is_ok());
        check!(
            to_query_string(&opt).expect("query")
                == "featured=true&username=jo&count=3&orientation=squarish&collections=1%2C22"
        );
    }

    #[test]
    fn random_photo_rejections() {
        let mut opt = RandomPhotoOpt {
            count: -1,
            ..RandomPhotoOpt::default()
        };
        let_assert!(Err(Error::InvalidOptions(_)) = opt.validate());

        let mut opt = RandomPhotoOpt {
            query: "dogs".to_string(),
            topics: vec!["nature".to_string()],
            ..RandomPhotoOpt::default()
        };
        let_assert!(Err(Error::InvalidOptions(message)) = opt.validate());
        check!(message.contains("query"));
    }

    #[test]
    fn stats_window() {
        let mut opt = StatsOpt::default();
        check!(opt.validate().is_ok());
        check!(to_query_string(&opt).expect("query") == "resolution=days&quantity=30");

        let mut opt = StatsOpt::days(31);
        check!(opt.validate().is_err());

        let mut opt = StatsOpt {
            resolution: "weeks".to_string(),
            quantity: 7,
        };
        check!(opt.validate().is_err());

        let mut opt = StatsOpt {
            resolution: String::new(),
            quantity: 0,
        };
        check!(opt.validate().is_ok());
        check!(opt == StatsOpt::default());
    }

    #[test]
    fn collection_and_profile_encoding() {
        let opt = CollectionOpt {
            private: Some(true),
            ..CollectionOpt::titled("Dogs")
        };
        check!(to_query_string(&opt).expect("query") == "title=Dogs&private=true");

        let opt = ProfileImageOpt { w: 64, h: 0 };
        check!(to_query_string(&opt).expect("query") == "w=64");
    }

    #[test]
    fn user_update_uses_wire_names() {
        let info = UserUpdateInfo {
            bio: "hello".to_string(),
            portfolio_url: "https://example.com".to_string(),
            ..UserUpdateInfo::default()
        };
        check!(
            to_query_string(&info).expect("query")
                == "bio=hello&url=https%3A%2F%2Fexample.com"
        );
    }
}
