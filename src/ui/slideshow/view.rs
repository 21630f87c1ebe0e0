// SPDX-License-Identifier: MPL-2.0
//! Slideshow rendering.
//!
//! Layout: a dimmed backdrop filling the window, with a centered content card
//! on top. Presses on the backdrop close the slideshow; the card is opaque so
//! presses on it never reach the backdrop.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::slideshow::{Counter, DisplayState, Navigator, StepContent};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Color, ContentFit, Element, Length};
use std::path::Path;

pub fn view<'a>(navigator: Option<&'a Navigator>, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(navigator) = navigator else {
        return Column::new().into();
    };

    let card: Element<'a, Message> = if navigator.is_revealed() {
        content_card(navigator.display(), i18n)
    } else {
        placeholder()
    };

    let centered = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    mouse_area(centered)
        .on_press(Message::BackdropPressed)
        .into()
}

/// Black card shown until the reveal delay elapses.
fn placeholder<'a>() -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .style(styles::container::placeholder)
        .into()
}

fn content_card<'a>(state: DisplayState<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    // Content fades while a transition is pending.
    let alpha = if state.is_transitioning {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::OPAQUE
    };

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(counter_text(i18n, "slideshow-panel-counter", state.panel_counter))
                    .size(typography::TITLE_SM),
            )
            .width(Length::Fill),
        )
        .push(
            Text::new(counter_text(i18n, "slideshow-step-counter", state.step_counter))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            button(Text::new(i18n.tr("slideshow-close")).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::ghost)
                .on_press(Message::ClosePressed),
        );

    let mut body = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill);

    match state.content {
        StepContent::Scene { text } => {
            body = body
                .push(
                    Text::new(i18n.tr("slideshow-scene-heading"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .push(
                    Text::new(text)
                        .size(typography::TITLE_MD)
                        .color(fade(palette::WHITE, alpha)),
                );
        }
        StepContent::Image { image } => {
            body = body.push(panel_image(image, state.panel.image_available, alpha, i18n));
        }
        StepContent::Dialogue { image, line } => {
            body = body
                .push(panel_image(image, state.panel.image_available, alpha, i18n))
                .push(
                    Container::new(
                        Text::new(line)
                            .size(typography::BODY_LG)
                            .color(fade(palette::WHITE, alpha)),
                    )
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::speech),
                );
        }
    }

    if let Some(narration) = state.narration {
        body = body.push(
            Container::new(
                Text::new(narration)
                    .size(typography::BODY)
                    .color(fade(palette::GRAY_100, alpha)),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::caption),
        );
    }

    let previous = button(Text::new(i18n.tr("slideshow-previous")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press_maybe(state.can_go_back.then_some(Message::PreviousPressed));

    let next = button(Text::new(i18n.tr(state.next_label.i18n_key())))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::NextPressed);

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(
            Container::new(
                Text::new(i18n.tr("slideshow-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        )
        .push(next);

    let card = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        )
        .push(controls);

    Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn panel_image<'a>(
    path: &'a Path,
    available: bool,
    alpha: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    if available {
        image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha)
            .into()
    } else {
        let path_text = path.display().to_string();
        Container::new(
            Text::new(i18n.tr_with_args("slideshow-image-missing", &[("path", &path_text)]))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
    }
}

fn counter_text(i18n: &I18n, key: &str, counter: Counter) -> String {
    let current = counter.current.to_string();
    let total = counter.total.to_string();
    i18n.tr_with_args(key, &[("current", &current), ("total", &total)])
}

fn fade(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
