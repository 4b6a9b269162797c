//! `Link` header pagination.
//!
//! Listing endpoints answer with an RFC 5988 style header:
//!
//! ```text
//! Link: <https://api.unsplash.com/photos?page=1>; rel="first",
//!       <https://api.unsplash.com/photos?page=3>; rel="next"
//! ```
//!
//! Parsing is best effort: a missing header or an entry that does not parse
//! leaves the corresponding page at zero and never fails the response.

use http::HeaderMap;
use tracing::trace;

/// Page numbers advertised by the `Link` header.
///
/// All fields are zero (and `has_next_page` false) when the endpoint does
/// not paginate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// `rel="first"` page.
    pub first: u32,
    /// `rel="prev"` page.
    pub prev: u32,
    /// `rel="next"` page.
    pub next: u32,
    /// `rel="last"` page.
    pub last: u32,
    /// Set when a `rel="next"` entry was found.
    pub has_next_page: bool,
}

impl Pagination {
    /// Read every `Link` header field; later fields win for a repeated
    /// relation.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut pagination = Self::default();
        for value in headers.get_all(http::header::LINK) {
            let Ok(value) = value.to_str() else {
                trace!("skipping non-ASCII link header");
                continue;
            };
            pagination.merge_link_header(value);
        }
        pagination
    }

    /// Parse a raw `Link` header value.
    ///
    /// ```
    /// use unsplash_core::Pagination;
    ///
    /// let pagination = Pagination::parse_link_header(
    ///     r#"<https://api.example/x?page=2>; rel="next", <https://api.example/x?page=5>; rel="last""#,
    /// );
    /// assert_eq!(pagination.next, 2);
    /// assert!(pagination.has_next_page);
    /// assert_eq!(pagination.last, 5);
    /// assert_eq!(pagination.first, 0);
    /// ```
    #[must_use]
    pub fn parse_link_header(value: &str) -> Self {
        let mut pagination = Self::default();
        pagination.merge_link_header(value);
        pagination
    }

    fn merge_link_header(&mut self, value: &str) {
        for entry in value.split(',') {
            let Some((page, rel)) = parse_entry(entry) else {
                trace!(entry, "skipping malformed link entry");
                continue;
            };
            // Relation types are case-insensitive.
            match rel.to_ascii_lowercase().as_str() {
                "first" => self.first = page,
                "prev" => self.prev = page,
                "last" => self.last = page,
                "next" => {
                    self.next = page;
                    self.has_next_page = true;
                }
                _ => trace!(rel, "ignoring unknown link relation"),
            }
        }
    }
}

/// `<url>; rel="name"` into (page, name).
fn parse_entry(entry: &str) -> Option<(u32, &str)> {
    let mut parts = entry.split(';');
    let target = parts.next()?.trim();
    let href = target.strip_prefix('<')?.strip_suffix('>')?;

    let rel = parts.find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim().eq_ignore_ascii_case("rel").then(|| value.trim().trim_matches('"'))
    })?;

    let (_, query) = href.split_once('?')?;
    let page = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())?;

    Some((page, rel))
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn next_and_last() {
        let pagination = Pagination::parse_link_header(
            r#"<https://api.example/x?page=2>; rel="next", <https://api.example/x?page=5>; rel="last""#,
        );
        assert_eq!(
            pagination,
            Pagination {
                first: 0,
                prev: 0,
                next: 2,
                last: 5,
                has_next_page: true,
            }
        );
    }

    #[test]
    fn all_relations() {
        let pagination = Pagination::parse_link_header(concat!(
            r#"<https://api.unsplash.com/photos?page=1&per_page=10>; rel="first", "#,
            r#"<https://api.unsplash.com/photos?page=3&per_page=10>; rel="prev", "#,
            r#"<https://api.unsplash.com/photos?page=5&per_page=10>; rel="next", "#,
            r#"<https://api.unsplash.com/photos?page=120&per_page=10>; rel="last""#,
        ));
        assert_eq!(pagination.first, 1);
        assert_eq!(pagination.prev, 3);
        assert_eq!(pagination.next, 5);
        assert_eq!(pagination.last, 120);
        assert!(pagination.has_next_page);
    }

    #[test]
    fn last_page_has_no_next() {
        let pagination = Pagination::parse_link_header(
            r#"<https://api.example/x?page=1>; rel="first", <https://api.example/x?page=4>; rel="prev""#,
        );
        assert_eq!(pagination.prev, 4);
        assert!(!pagination.has_next_page);
        assert_eq!(pagination.next, 0);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let pagination = Pagination::parse_link_header(concat!(
            r#"<https://api.example/x?page=abc>; rel="first", "#,
            r#"https://api.example/x?page=2; rel="prev", "#,
            r#"<https://api.example/x>; rel="last", "#,
            r#"<https://api.example/x?page=7>, "#,
            r#"<https://api.example/x?page=3>; rel="next""#,
        ));
        assert_eq!(pagination.first, 0);
        assert_eq!(pagination.prev, 0);
        assert_eq!(pagination.last, 0);
        assert_eq!(pagination.next, 3);
        assert!(pagination.has_next_page);
    }

    #[test]
    fn relative_links_are_accepted() {
        let pagination = Pagination::parse_link_header(r#"</photos?per_page=5&page=9>; rel=last"#);
        assert_eq!(pagination.last, 9);
    }

    #[test]
    fn relations_ignore_case() {
        let pagination = Pagination::parse_link_header(
            r#"<https://api.example/x?page=2>; rel="Next", <https://api.example/x?page=6>; REL="LAST""#,
        );
        assert_eq!(pagination.next, 2);
        assert!(pagination.has_next_page);
        assert_eq!(pagination.last, 6);
    }

    #[test]
    fn one_field_per_relation() {
        let mut headers = HeaderMap::new();
        headers.append(
            http::header::LINK,
            HeaderValue::from_static(r#"<https://api.example/x?page=1>; rel="first""#),
        );
        headers.append(
            http::header::LINK,
            HeaderValue::from_static(r#"<https://api.example/x?page=3>; rel="next""#),
        );
        headers.append(
            http::header::LINK,
            HeaderValue::from_static(r#"<https://api.example/x?page=8>; rel="last""#),
        );

        let pagination = Pagination::from_headers(&headers);
        assert_eq!(
            pagination,
            Pagination {
                first: 1,
                prev: 0,
                next: 3,
                last: 8,
                has_next_page: true,
            }
        );
    }

    #[test]
    fn missing_header_is_all_zero() {
        assert_eq!(Pagination::from_headers(&HeaderMap::new()), Pagination::default());
    }

    #[test]
    fn reads_link_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::LINK,
            HeaderValue::from_static(r#"<https://api.example/x?page=2>; rel="next""#),
        );
        let pagination = Pagination::from_headers(&headers);
        assert_eq!(pagination.next, 2);
        assert!(pagination.has_next_page);
    }
}
