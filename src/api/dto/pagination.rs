//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `?page=N` query parameter for post listings.
///
/// Uses `serde_with` to parse the page number from the query string as an
/// integer.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl PageQuery {
    /// 1-based page number; absent or zero values clamp to the first page.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}
