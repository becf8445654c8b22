// SPDX-License-Identifier: MPL-2.0
//! Listing request and result types.

use super::newtypes::{PageNumber, PageSize};

/// One entry of the remote listing.
///
/// Only the fields the carousel uses are kept; everything else the server
/// sends (author, dimensions, page URL) is dropped at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteImage {
    /// Stable identifier, used as the render key.
    pub id: String,
    /// Direct URL of the image bytes; doubles as the alt text.
    pub download_url: String,
}

impl RemoteImage {
    #[must_use]
    pub fn new(id: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            download_url: download_url.into(),
        }
    }
}

/// What to ask the listing endpoint for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    /// Base URL the `list` path is appended to, e.g. `https://picsum.photos/v2/`.
    pub base_url: String,
    pub page: PageNumber,
    pub limit: PageSize,
}

impl ListingQuery {
    #[must_use]
    pub fn new(base_url: impl Into<String>, page: PageNumber, limit: PageSize) -> Self {
        Self {
            base_url: base_url.into(),
            page,
            limit,
        }
    }

    /// Returns true when a base URL is configured, i.e. a fetch can be issued.
    ///
    /// Whitespace-only input counts as empty, not just the empty string.
    #[must_use]
    pub fn has_base_url(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Builds `<base_url>list?page=<page>&limit=<limit>`.
    ///
    /// Unlike plain `<base_url>list` concatenation, surrounding whitespace is
    /// trimmed and a missing trailing slash is added, so `https://host/v2`
    /// and `https://host/v2/` address the same listing.
    #[must_use]
    pub fn listing_url(&self) -> String {
        let base = self.base_url.trim();
        let separator = if base.ends_with('/') { "" } else { "/" };
        format!(
            "{base}{separator}list?page={}&limit={}",
            self.page.value(),
            self.limit.value()
        )
    }
}
