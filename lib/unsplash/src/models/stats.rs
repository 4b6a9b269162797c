use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Platform totals from `stats/total`.
///
/// Some counters come back as JSON strings (`"12345.0"`), others as numbers.
/// Both decode to `u64`; anything unparseable becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "GlobalStatsWire")]
pub struct GlobalStats {
    /// Same as `photos`.
    pub total_photos: u64,
    /// Same as `downloads`.
    pub photo_downloads: u64,
    /// Photos published.
    pub photos: u64,
    /// Downloads.
    pub downloads: u64,
    /// Views.
    pub views: u64,
    /// Likes.
    pub likes: u64,
    /// Contributors.
    pub photographers: u64,
    /// Pixels served.
    pub pixels: u64,
    /// Downloads per second, averaged.
    pub downloads_per_second: u64,
    /// Views per second, averaged.
    pub views_per_second: u64,
    /// Registered developers.
    pub developers: u64,
    /// Registered applications.
    pub applications: u64,
    /// API requests.
    pub requests: u64,
}

#[derive(Deserialize)]
struct GlobalStatsWire {
    #[serde(default, deserialize_with = "number_or_string")]
    photos: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    downloads: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    views: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    likes: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    photographers: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pixels: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    downloads_per_second: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    views_per_second: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    developers: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    applications: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    requests: u64,
}

impl From<GlobalStatsWire> for GlobalStats {
    fn from(wire: GlobalStatsWire) -> Self {
        Self {
            total_photos: wire.photos,
            photo_downloads: wire.downloads,
            photos: wire.photos,
            downloads: wire.downloads,
            views: wire.views,
            likes: wire.likes,
            photographers: wire.photographers,
            pixels: wire.pixels,
            downloads_per_second: wire.downloads_per_second,
            views_per_second: wire.views_per_second,
            developers: wire.developers,
            applications: wire.applications,
            requests: wire.requests,
        }
    }
}

impl fmt::Display for GlobalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Global Stats: Photos[{}] Downloads[{}] Views[{}] Likes[{}] Photographers[{}] Pixels[{}] \
             DownloadsPerSecond[{}] ViewsPerSecond[{}] Developers[{}] Applications[{}] Requests[{}]",
            self.photos,
            self.downloads,
            self.views,
            self.likes,
            self.photographers,
            self.pixels,
            self.downloads_per_second,
            self.views_per_second,
            self.developers,
            self.applications,
            self.requests,
        )
    }
}

/// Totals for the last 30 days from `stats/month`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MonthStats {
    /// Downloads.
    #[serde(default, deserialize_with = "number_or_string")]
    pub downloads: u64,
    /// Views.
    #[serde(default, deserialize_with = "number_or_string")]
    pub views: u64,
    /// Likes.
    #[serde(default, deserialize_with = "number_or_string")]
    pub likes: u64,
    /// New photos.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_photos: u64,
    /// New contributors.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_photographers: u64,
    /// New pixels.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_pixels: u64,
    /// New developers.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_developers: u64,
    /// New applications.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_applications: u64,
    /// New API requests.
    #[serde(default, deserialize_with = "number_or_string")]
    pub new_requests: u64,
}

impl fmt::Display for MonthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monthly Stats: Downloads[{}] Views[{}] Likes[{}] New Photos[{}] New Photographers[{}] \
             New Pixels[{}] New Developers[{}] New Applications[{}] New Requests[{}]",
            self.downloads,
            self.views,
            self.likes,
            self.new_photos,
            self.new_photographers,
            self.new_pixels,
            self.new_developers,
            self.new_applications,
            self.new_requests,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

// Integer part of a number or numeric string; 0 when it cannot be read.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Unsigned(n) => n,
        NumberOrString::Float(f) => f as u64,
        NumberOrString::Text(s) => {
            let integer = s.trim().split('.').next().unwrap_or_default();
            integer.parse().unwrap_or_default()
        }
        NumberOrString::Other(_) => 0,
    };
    Ok(value)
}

/// Download, view and like history of a photo or a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Statistics {
    /// Photo id, for photo statistics.
    pub id: Option<String>,
    /// Username, for user statistics.
    pub username: Option<String>,
    /// Downloads.
    #[serde(default)]
    pub downloads: Metric,
    /// Views.
    #[serde(default)]
    pub views: Metric,
    /// Likes.
    #[serde(default)]
    pub likes: Metric,
}

/// One counter with its history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metric {
    /// All-time total.
    #[serde(default)]
    pub total: u64,
    /// Values over the requested window.
    #[serde(default)]
    pub historical: Historical,
}

/// History of a counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Historical {
    /// Total over the window.
    #[serde(default)]
    pub change: i64,
    /// Average per step, user statistics only.
    pub average: Option<u64>,
    /// Step size, `days`.
    #[serde(default)]
    pub resolution: String,
    /// Number of steps.
    #[serde(default)]
    pub quantity: u32,
    /// One value per step.
    #[serde(default)]
    pub values: Vec<HistoricalValue>,
}

/// A dated value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoricalValue {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Value for that day.
    #[serde(default)]
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_stats_accepts_numbers_and_strings() {
        let stats: GlobalStats = serde_json::from_str(
            r#"{
                "photos": 1530123,
                "downloads": "164827294.0",
                "views": "17101292543",
                "likes": 1.5e3,
                "photographers": null,
                "pixels": "lots",
                "downloads_per_second": 7,
                "developers": 103544
            }"#,
        )
        .expect("stats");

        assert_eq!(stats.photos, 1_530_123);
        assert_eq!(stats.total_photos, 1_530_123);
        assert_eq!(stats.downloads, 164_827_294);
        assert_eq!(stats.photo_downloads, 164_827_294);
        assert_eq!(stats.views, 17_101_292_543);
        assert_eq!(stats.likes, 1500);
        assert_eq!(stats.photographers, 0);
        assert_eq!(stats.pixels, 0);
        assert_eq!(stats.views_per_second, 0);
        assert_eq!(stats.developers, 103_544);
    }

    #[test]
    fn month_stats_decodes() {
        let stats: MonthStats = serde_json::from_str(
            r#"{"downloads": "4215.0", "views": 2000, "new_photos": 97, "new_requests": "1e9"}"#,
        )
        .expect("stats");

        assert_eq!(stats.downloads, 4215);
        assert_eq!(stats.views, 2000);
        assert_eq!(stats.new_photos, 97);
        assert_eq!(stats.new_requests, 0);
        assert!(stats.to_string().starts_with("Monthly Stats: Downloads[4215]"));
    }

    #[test]
    fn statistics_history() {
        let stats: Statistics = serde_json::from_str(
            r#"{
                "username": "jimmy",
                "downloads": {
                    "total": 1200,
                    "historical": {
                        "change": 12,
                        "average": 3,
                        "resolution": "days",
                        "quantity": 2,
                        "values": [{"date": "2017-06-14", "value": 5}, {"date": "2017-06-15", "value": 7}]
                    }
                },
                "views": {"total": 5}
            }"#,
        )
        .expect("statistics");

        assert_eq!(stats.downloads.total, 1200);
        assert_eq!(stats.downloads.historical.average, Some(3));
        assert_eq!(stats.downloads.historical.values.len(), 2);
        assert_eq!(stats.views.total, 5);
        assert!(stats.views.historical.values.is_empty());
        assert_eq!(stats.likes, Metric::default());
    }
}
