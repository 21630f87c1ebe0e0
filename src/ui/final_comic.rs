// SPDX-License-Identifier: MPL-2.0
//! Full-page view of the assembled comic, shown when the slideshow ends.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Contextual data needed to render the final comic screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub image: &'a Path,
    /// Whether `image` was on disk when the comic was loaded.
    pub image_available: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Replay,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Replay,
    Close,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Replay => Event::Replay,
        Message::Close => Event::Close,
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(
        ctx.i18n
            .tr_with_args("final-comic-heading", &[("title", ctx.title)]),
    )
    .size(typography::TITLE_LG);

    let artwork: Element<'_, Message> = if ctx.image_available {
        image(image::Handle::from_path(ctx.image))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        let path_text = ctx.image.display().to_string();
        Container::new(
            Text::new(
                ctx.i18n
                    .tr_with_args("slideshow-image-missing", &[("path", &path_text)]),
            )
            .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    };

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("final-comic-replay")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Replay),
        )
        .push(
            button(Text::new(ctx.i18n.tr("final-comic-close")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::secondary)
                .on_press(Message::Close),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::FINAL_COMIC_MAX_WIDTH)
        .push(title)
        .push(artwork)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}
