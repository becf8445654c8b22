// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[source]` - Listing endpoint, pagination and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_CAROUSEL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("{}", config.source.listing_query().listing_url());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::listing::{ListingQuery, PageNumber, PageSize};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where the carousel gets its images from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// Base URL; `list?page=..&limit=..` is appended to it.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Page of the listing to show.
    #[serde(default = "default_page", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of images per page.
    #[serde(default = "default_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Upper bound for one HTTP request, in seconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            limit: default_limit(),
            request_timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Builds the listing query, clamping page and limit to valid ranges.
    #[must_use]
    pub fn listing_query(&self) -> ListingQuery {
        ListingQuery::new(
            self.base_url.clone().unwrap_or_default(),
            PageNumber::new(self.page.unwrap_or(DEFAULT_PAGE)),
            PageSize::new(self.limit.unwrap_or(DEFAULT_LIMIT)),
        )
    }

    /// Request timeout, ignoring a zero value.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Listing source settings.
    #[serde(default)]
    pub source: SourceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_page() -> Option<u32> {
    Some(DEFAULT_PAGE)
}

fn default_limit() -> Option<u32> {
    Some(DEFAULT_LIMIT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"

[source]
base_url = "http://localhost:9000/v2/"
page = 3
limit = 25
request_timeout_secs = 15
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                },
                source: SourceConfig {
                    base_url: Some("http://localhost:9000/v2/".to_string()),
                    page: Some(3),
                    limit: Some(25),
                    request_timeout_secs: Some(15),
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[source\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_source_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[source]\nlimit = 3\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.source.limit, Some(3));
        assert_eq!(loaded.source.page, Some(DEFAULT_PAGE));
        assert_eq!(loaded.source.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.source.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(config.source.page, Some(DEFAULT_PAGE));
        assert_eq!(config.source.limit, Some(DEFAULT_LIMIT));
        assert_eq!(config.source.request_timeout(), None);
    }

    #[test]
    fn listing_query_clamps_out_of_range_values() {
        let source = SourceConfig {
            base_url: Some("https://picsum.photos/v2/".to_string()),
            page: Some(0),
            limit: Some(1000),
            request_timeout_secs: Some(0),
        };
        let query = source.listing_query();
        assert_eq!(query.page.value(), 1);
        assert_eq!(query.limit.value(), 100);
        assert_eq!(source.request_timeout(), None);
    }
}
