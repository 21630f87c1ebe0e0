// SPDX-License-Identifier: MPL-2.0
//! Screen shown after the slideshow is dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    Replay,
    ViewFullComic,
    Quit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Replay,
    ViewFullComic,
    Quit,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Replay => Event::Replay,
        Message::ViewFullComic => Event::ViewFullComic,
        Message::Quit => Event::Quit,
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("closed-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.title)
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .push(
            button(Text::new(ctx.i18n.tr("closed-replay")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Replay),
        )
        .push(
            button(Text::new(ctx.i18n.tr("closed-view-full-comic")))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary)
                .on_press(Message::ViewFullComic),
        )
        .push(
            button(Text::new(ctx.i18n.tr("closed-quit")).size(typography::BODY))
                .style(styles::button::ghost)
                .on_press(Message::Quit),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
