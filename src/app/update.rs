// SPDX-License-Identifier: MPL-2.0
//! Update logic: applies messages and turns effects into tasks.

use super::{App, Message};
use crate::slider::{self, DisplayState, Effect};
use crate::ui::carousel::picture;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(msg) => {
                let effect = self.store.dispatch(msg);
                let fetch = self.run_effect(effect);
                let download = self.sync_picture();
                Task::batch([fetch, download])
            }
            Message::ImageFetched { url, result } => {
                self.picture
                    .handle(picture::Message::Fetched { url, result });
                Task::none()
            }
        }
    }

    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::FetchListing { ticket, query } => {
                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_listing(&query).await },
                    move |result| Message::Slider(slider::Message::Loaded { ticket, result }),
                )
            }
        }
    }

    /// Starts a download when the slide on screen changed.
    ///
    /// Nothing is synced while loading or showing an error; the picture keeps
    /// whatever it had until the ready view comes back.
    fn sync_picture(&mut self) -> Task<Message> {
        let state = self.store.state();
        if state.display_state() != DisplayState::Ready {
            return Task::none();
        }

        match self.picture.sync(state.current_image()) {
            picture::Effect::None => Task::none(),
            picture::Effect::Download { id, url } => {
                tracing::debug!(%id, %url, "downloading current slide");
                let client = self.client.clone();
                let source = url.clone();
                Task::perform(
                    async move { client.fetch_image(&source).await },
                    move |result| Message::ImageFetched { url, result },
                )
            }
        }
    }
}
