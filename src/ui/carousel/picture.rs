// SPDX-License-Identifier: MPL-2.0
//! Bytes of the slide currently on screen.
//!
//! Only the current slide is downloaded. A picture is keyed by its
//! `download_url`: navigating away while a download is in flight does not
//! cancel it, and the late result is dropped because its URL no longer
//! matches. A refetch that keeps an `id` but changes its URL downloads again.

use crate::domain::listing::RemoteImage;
use crate::error::FetchError;
use iced::widget::image::Handle;

/// Download status of the displayed slide.
#[derive(Debug, Clone, Default)]
pub enum Picture {
    /// No slide is displayed.
    #[default]
    Empty,
    /// Bytes requested, `url` shown as alt text meanwhile.
    Pending { id: String, url: String },
    /// Decodable handle ready for the image widget.
    Ready { id: String, url: String, handle: Handle },
    /// Download failed; `url` stays on screen as alt text.
    Failed { id: String, url: String },
}

impl Picture {
    /// Source URL of the slide this picture belongs to.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Picture::Empty => None,
            Picture::Pending { url, .. }
            | Picture::Ready { url, .. }
            | Picture::Failed { url, .. } => Some(url),
        }
    }

    fn shows(&self, image: &RemoteImage) -> bool {
        match self {
            Picture::Empty => false,
            Picture::Pending { id, url }
            | Picture::Ready { id, url, .. }
            | Picture::Failed { id, url } => *id == image.id && *url == image.download_url,
        }
    }
}

/// Picture sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    picture: Picture,
}

/// Messages for the picture sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The download of `url` settled.
    Fetched {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
}

/// Effects produced by the picture sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Download `url` and report back with `Message::Fetched { id, .. }`.
    Download { id: String, url: String },
}

impl State {
    #[must_use]
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Follows the slide on screen; requests a download when it changed.
    pub fn sync(&mut self, current: Option<&RemoteImage>) -> Effect {
        let Some(image) = current else {
            self.picture = Picture::Empty;
            return Effect::None;
        };
        if self.picture.shows(image) {
            return Effect::None;
        }

        self.picture = Picture::Pending {
            id: image.id.clone(),
            url: image.download_url.clone(),
        };
        Effect::Download {
            id: image.id.clone(),
            url: image.download_url.clone(),
        }
    }

    /// Handle a picture message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Fetched { url, result } => {
                let Picture::Pending { id, url: pending } = &self.picture else {
                    return;
                };
                if *pending != url {
                    tracing::debug!(%url, "dropping download for a slide no longer shown");
                    return;
                }
                let id = id.clone();
                self.picture = match result {
                    Ok(bytes) => Picture::Ready {
                        id,
                        url,
                        handle: Handle::from_bytes(bytes),
                    },
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "image download failed");
                        Picture::Failed { id, url }
                    }
                };
            }
        }
    }
}
