// SPDX-License-Identifier: MPL-2.0
//! Carousel widget: renders a [`CarouselView`] with iced widgets.
//!
//! Layout of the ready view:
//!
//! ```text
//! [ ‹ ]  [        current image        ]  [ › ]
//!               ●  ○  ○  ○  ○
//! ```

pub mod picture;

use crate::i18n::fluent::I18n;
use crate::slider::{view_model, CarouselView, Message, SliderState, Slides};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use picture::Picture;

/// Everything the carousel needs to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a SliderState,
    pub picture: &'a picture::State,
}

/// Renders the carousel for the current state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match view_model(ctx.state) {
        CarouselView::Loading => notice(Text::new(ctx.i18n.tr("carousel-loading"))),
        CarouselView::Error { message } => error_view(ctx.i18n, message),
        CarouselView::Ready(None) => empty_frame(),
        CarouselView::Ready(Some(slides)) => slides_view(ctx.i18n, &slides, ctx.picture),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn notice<'a>(text: Text<'a>) -> Element<'a, Message> {
    Container::new(text.size(typography::BODY))
        .padding(spacing::LG)
        .into()
}

fn error_view<'a>(i18n: &I18n, message: &str) -> Element<'a, Message> {
    let text = Text::new(i18n.tr_with_args("carousel-error", &[("message", message)]))
        .size(typography::BODY);

    Container::new(text)
        .padding(spacing::LG)
        .style(styles::container::error_notice)
        .into()
}

fn empty_frame<'a>() -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fixed(sizing::SLIDE_WIDTH))
        .height(Length::Fixed(sizing::SLIDE_HEIGHT))
        .style(styles::container::slide_frame)
        .into()
}

fn slides_view<'a>(
    i18n: &I18n,
    slides: &Slides<'_>,
    picture: &'a picture::State,
) -> Element<'a, Message> {
    let previous = arrow_button("‹", i18n.tr("carousel-previous"), slides.previous_message());
    let next = arrow_button("›", i18n.tr("carousel-next"), slides.next_message());

    let slide = Container::new(slide_content(slides, picture))
        .width(Length::Fixed(sizing::SLIDE_WIDTH))
        .height(Length::Fixed(sizing::SLIDE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::slide_frame);

    let stage = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(slide)
        .push(next);

    let indicators = slides.indicators.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, indicator| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .padding(0)
                    .style(styles::button::indicator(indicator.active))
                    .on_press(indicator.message()),
            )
        },
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(indicators)
        .into()
}

/// The downloaded image, or its alt text while pending or after a failure.
fn slide_content<'a>(slides: &Slides<'_>, picture: &'a picture::State) -> Element<'a, Message> {
    match picture.picture() {
        Picture::Ready { id, url, handle }
            if *id == slides.current.id && url == slides.source() =>
        {
            Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into()
        }
        _ => Text::new(slides.alt_text().to_owned())
            .size(typography::CAPTION)
            .into(),
    }
}

fn arrow_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let content = Text::new(glyph)
        .size(typography::ARROW)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let arrow = button(content)
        .width(Length::Fixed(sizing::ARROW_BUTTON))
        .height(Length::Fixed(sizing::ARROW_BUTTON))
        .style(styles::button::arrow)
        .on_press(message);

    styles::tooltip::styled(arrow, label, tooltip::Position::Bottom).into()
}
