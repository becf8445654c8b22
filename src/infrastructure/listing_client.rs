// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the image listing endpoint.
//!
//! The listing is a JSON array of objects; only `id` and `download_url` are
//! read. Non-2xx responses are reported as [`FetchError::Status`] before the
//! body is looked at, so an HTML or JSON error page never reaches the parser.

use crate::domain::listing::{ListingQuery, RemoteImage};
use crate::error::FetchError;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Maximum redirects followed (picsum redirects image URLs to a CDN).
const MAX_REDIRECTS: usize = 10;

/// Thin wrapper around a shared `reqwest::Client`.
///
/// Cloning is cheap; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct ListingClient {
    http: reqwest::Client,
}

impl ListingClient {
    /// Builds a client. `timeout` bounds each whole request; `None` waits forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetches one page of the listing described by `query`.
    pub async fn fetch_listing(&self, query: &ListingQuery) -> Result<Vec<RemoteImage>, FetchError> {
        if !query.has_base_url() {
            return Err(FetchError::InvalidUrl("base URL is empty".to_string()));
        }
        let url = query.listing_url();
        tracing::debug!(%url, "requesting image listing");

        let body = self.get_bytes(&url).await?;
        let images = parse_listing(&body)?;

        tracing::info!(%url, count = images.len(), "image listing received");
        Ok(images)
    }

    /// Downloads the raw bytes of one image.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(%url, "downloading image");
        self.get_bytes(url).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(FetchError::from_reqwest)?;
        Ok(bytes.to_vec())
    }
}

/// Wire shape of one listing entry; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ListingEntry {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    download_url: String,
}

impl From<ListingEntry> for RemoteImage {
    fn from(entry: ListingEntry) -> Self {
        RemoteImage::new(entry.id, entry.download_url)
    }
}

/// Parses a listing body into domain images.
///
/// Fails with [`FetchError::Parse`] when the body is not JSON, not an array,
/// or an element lacks `id` / `download_url`.
pub fn parse_listing(body: &[u8]) -> Result<Vec<RemoteImage>, FetchError> {
    let entries: Vec<ListingEntry> = serde_json::from_slice(body)?;
    Ok(entries.into_iter().map(RemoteImage::from).collect())
}

/// Accepts `"id": "12"` as well as `"id": 12`.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
