use serde::{Deserialize, Serialize};

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult<T> {
    /// Matches across all pages.
    #[serde(default)]
    pub total: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// Matches on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
