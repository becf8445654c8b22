// SPDX-License-Identifier: MPL-2.0
//! Framework-independent description of what the carousel shows.
//!
//! [`view_model`] is a pure function of [`SliderState`]; the iced renderer in
//! `ui::carousel` only translates its output into widgets, and tests assert on
//! it directly instead of on a widget tree.

use super::state::{DisplayState, Message, SliderState};
use crate::domain::listing::RemoteImage;

/// One of the three mutually exclusive carousel views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView<'a> {
    /// Loading notice only.
    Loading,
    /// Error notice only.
    Error { message: &'a str },
    /// Controls and current image; `None` when the listing is empty, in which
    /// case no previous/next, image or indicator is rendered.
    Ready(Option<Slides<'a>>),
}

/// Controls of a non-empty carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slides<'a> {
    pub current: &'a RemoteImage,
    pub current_index: usize,
    pub indicators: Vec<Indicator>,
}

/// One direct-navigation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

impl Indicator {
    /// Message emitted when this indicator is pressed.
    #[must_use]
    pub fn message(self) -> Message {
        Message::GoTo(self.index)
    }
}

impl Slides<'_> {
    /// Message emitted by the "previous" control.
    #[must_use]
    pub fn previous_message(&self) -> Message {
        Message::Previous
    }

    /// Message emitted by the "next" control.
    #[must_use]
    pub fn next_message(&self) -> Message {
        Message::Next
    }

    /// Image source of the displayed slide.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.current.download_url
    }

    /// Alt text of the displayed slide (same as its source).
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.current.download_url
    }
}

impl<'a> CarouselView<'a> {
    /// The displayed image, if the ready view has one.
    #[must_use]
    pub fn current_image(&self) -> Option<&'a RemoteImage> {
        match self {
            CarouselView::Ready(Some(slides)) => Some(slides.current),
            _ => None,
        }
    }

    /// Whether previous/next and indicator controls are rendered.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        matches!(self, CarouselView::Ready(Some(_)))
    }
}

/// Builds the view for `state`.
#[must_use]
pub fn view_model(state: &SliderState) -> CarouselView<'_> {
    match state.display_state() {
        DisplayState::Loading => CarouselView::Loading,
        DisplayState::Error(message) => CarouselView::Error { message },
        DisplayState::Ready => {
            let slides = state.current_image().map(|current| {
                let current_index = state.current_index();
                Slides {
                    current,
                    current_index,
                    indicators: (0..state.images().len())
                        .map(|index| Indicator {
                            index,
                            active: index == current_index,
                        })
                        .collect(),
                }
            });
            CarouselView::Ready(slides)
        }
    }
}
