// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FetchError;
use crate::slider;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the slider store.
    Slider(slider::Message),
    /// Bytes of the displayed slide arrived (or failed).
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Every listing setting given here wins over `settings.toml`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Listing base URL, e.g. `https://picsum.photos/v2/`.
    pub url: Option<String>,
    /// Listing page (1-based).
    pub page: Option<u32>,
    /// Images per page.
    pub limit: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
