//! Symbolic API endpoints.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";

// RFC 3986 path segment: everything but unreserved characters and sub-delims
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Top-level API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The authenticated user (`me`).
    CurrentUser,
    /// Totals since the platform launched.
    GlobalStats,
    /// Totals for the last 30 days.
    MonthStats,
    /// Users (`users`).
    Users,
    /// Photos (`photos`).
    Photos,
    /// Collections (`collections`).
    Collections,
    /// User search.
    SearchUsers,
    /// Photo search.
    SearchPhotos,
    /// Collection search.
    SearchCollections,
}

impl Endpoint {
    /// Path relative to the API root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CurrentUser => "me",
            Self::GlobalStats => "stats/total",
            Self::MonthStats => "stats/month",
            Self::Users => "users",
            Self::Photos => "photos",
            Self::Collections => "collections",
            Self::SearchUsers => "search/users",
            Self::SearchPhotos => "search/photos",
            Self::SearchCollections => "search/collections",
        }
    }

    /// Append path segments, percent-encoding each one.
    ///
    /// ```
    /// use unsplash_core::Endpoint;
    ///
    /// let path = Endpoint::Photos.join(["a b", "stats"]).expect("segments");
    /// assert_eq!(path, "photos/a%20b/stats");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalArgument`] if a segment is empty, `.` or `..`.
    pub fn join<I, S>(self, segments: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = self.path().to_string();
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                return Err(Error::illegal_argument(format!(
                    "empty path segment under '{}'",
                    self.path()
                )));
            }
            // URL resolution would climb out of the endpoint.
            if segment == "." || segment == ".." {
                return Err(Error::illegal_argument(format!(
                    "'{segment}' is not a valid path segment under '{}'",
                    self.path()
                )));
            }
            path.push('/');
            path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        Ok(path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::CurrentUser.path(), "me");
        assert_eq!(Endpoint::GlobalStats.path(), "stats/total");
        assert_eq!(Endpoint::MonthStats.path(), "stats/month");
        assert_eq!(Endpoint::SearchPhotos.path(), "search/photos");
        assert_eq!(Endpoint::Collections.to_string(), "collections");
    }

    #[test]
    fn join_encodes_segments() {
        let path = Endpoint::Users.join(["jo/hn", "likes"]).expect("join");
        assert_eq!(path, "users/jo%2Fhn/likes");

        let path = Endpoint::Photos.join(["-HPhkZcJQNk"]).expect("join");
        assert_eq!(path, "photos/-HPhkZcJQNk");
    }

    #[test]
    fn join_rejects_empty_segment() {
        let err = Endpoint::Collections.join([""]).expect_err("empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn join_rejects_dot_segments() {
        for segments in [["..", "related"], [".", "like"]] {
            let err = Endpoint::Collections.join(segments).expect_err("dot segment");
            assert!(err.is_invalid_input());
        }
        assert!(Endpoint::Users.join([".."]).is_err());
    }

    #[test]
    fn dots_inside_a_segment_are_kept() {
        let path = Endpoint::Users.join(["jo.hn", "...", ".hidden"]).expect("join");
        assert_eq!(path, "users/jo.hn/.../.hidden");
    }

    #[test]
    fn join_without_segments_is_the_path() {
        let path = Endpoint::Photos.join(Vec::<String>::new()).expect("join");
        assert_eq!(path, "photos");
    }
}
