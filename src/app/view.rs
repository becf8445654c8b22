// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::carousel::{self, ViewContext};
use crate::ui::design_tokens::spacing;
use iced::widget::Container;
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let carousel = carousel::view(ViewContext {
            i18n: &self.i18n,
            state: self.store.state(),
            picture: &self.picture,
        })
        .map(Message::Slider);

        Container::new(carousel)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}
