// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! Single source of truth for the values used when `settings.toml` or the
//! command line leave a setting out.

// ==========================================================================
// Listing Source Defaults
// ==========================================================================

/// Listing endpoint used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://picsum.photos/v2/";

/// Page requested on startup.
pub const DEFAULT_PAGE: u32 = 1;

/// Images requested on startup.
pub const DEFAULT_LIMIT: u32 = 10;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS select an available one.
pub const DEFAULT_LOCALE: &str = "en-US";
