// SPDX-License-Identifier: MPL-2.0
//! Pagination newtypes.
//!
//! Both values are clamped on construction so a query built from user input
//! or a hand-edited config file is always well-formed.

// =============================================================================
// Pagination Bounds
// =============================================================================

/// Bounds for listing pagination parameters.
pub mod pagination_bounds {
    /// First page of a listing.
    pub const MIN_PAGE: u32 = 1;
    /// Default page requested when none is configured.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Smallest page size.
    pub const MIN_LIMIT: u32 = 1;
    /// Largest page size accepted by picsum-style listing endpoints.
    pub const MAX_LIMIT: u32 = 100;
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 5;
}

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page index, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// Creates a page number, raising 0 to the first page.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(pagination_bounds::MIN_PAGE))
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(pagination_bounds::DEFAULT_PAGE)
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of images requested per page (1–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size, clamping to the supported range.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self(limit.clamp(pagination_bounds::MIN_LIMIT, pagination_bounds::MAX_LIMIT))
    }

    /// Returns the raw page size.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(pagination_bounds::DEFAULT_LIMIT)
    }
}
