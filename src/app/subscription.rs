// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events reach the slideshow only while it is on screen and only
//! when no widget captured them first.

use super::{Message, Screen};
use crate::ui::slideshow;
use iced::{event, Subscription};

pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Slideshow => event::listen_with(|event, status, window_id| {
            let is_free_key = matches!(event, event::Event::Keyboard(..))
                && status == event::Status::Ignored;
            is_free_key.then(|| {
                Message::Slideshow(slideshow::Message::RawEvent {
                    window: window_id,
                    event,
                })
            })
        }),
        Screen::Loading | Screen::FinalComic | Screen::Closed | Screen::Failed => {
            Subscription::none()
        }
    }
}
