// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::comic::Comic;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{closed, final_comic, slideshow};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub comic: Option<&'a Comic>,
    pub slideshow: &'a slideshow::State,
    pub load_error: Option<&'a Error>,
    pub config_warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.comic) {
        (Screen::Slideshow, _) => ctx.slideshow.view(ctx.i18n).map(Message::Slideshow),
        (Screen::FinalComic, Some(comic)) => final_comic::view(final_comic::ViewContext {
            i18n: ctx.i18n,
            title: &comic.title,
            image: &comic.final_comic,
            image_available: comic.final_comic_available,
        })
        .map(Message::FinalComic),
        (Screen::Closed, Some(comic)) => closed::view(closed::ViewContext {
            i18n: ctx.i18n,
            title: &comic.title,
        })
        .map(Message::Closed),
        (Screen::Failed, _) => view_load_error(ctx.i18n, ctx.load_error),
        (Screen::Loading | Screen::FinalComic | Screen::Closed, _) => Column::new().into(),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .padding([spacing::XXS, spacing::SM]),
        );
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_load_error<'a>(i18n: &'a I18n, error: Option<&'a Error>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("error-heading"))
                .size(typography::TITLE_LG)
                .color(palette::ERROR_500),
        );

    if let Some(error) = error {
        let details = error.to_string();
        content = content
            .push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY_LG))
            .push(
                Text::new(i18n.tr_with_args("error-details", &[("details", &details)]))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
