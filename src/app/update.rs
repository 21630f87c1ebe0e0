// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives the pieces of application state it needs through
//! [`UpdateContext`] and returns the follow-up task.

use super::{Message, Screen};
use crate::comic::Comic;
use crate::error::Error;
use crate::slideshow::Timing;
use crate::ui::{closed, final_comic, slideshow};
use iced::Task;

/// Mutable view of the application state handed to the update handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub comic: &'a mut Option<Comic>,
    pub slideshow: &'a mut slideshow::State,
    pub load_error: &'a mut Option<Error>,
    pub timing: Timing,
}

impl UpdateContext<'_> {
    /// Mounts a fresh slideshow at the first step of the loaded comic.
    fn start_slideshow(&mut self) -> Task<Message> {
        let Some(comic) = self.comic.as_ref() else {
            return Task::none();
        };

        self.slideshow.unmount();
        let (state, task) = slideshow::State::mount(comic.panels.clone(), self.timing);
        *self.slideshow = state;
        *self.screen = Screen::Slideshow;
        task.map(Message::Slideshow)
    }
}

pub fn handle_comic_loaded(ctx: &mut UpdateContext<'_>, result: Result<Comic, Error>) -> Task<Message> {
    match result {
        Ok(comic) => {
            *ctx.comic = Some(comic);
            *ctx.load_error = None;
            ctx.start_slideshow()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to open comic");
            *ctx.load_error = Some(err);
            *ctx.screen = Screen::Failed;
            Task::none()
        }
    }
}

pub fn handle_slideshow_message(
    ctx: &mut UpdateContext<'_>,
    message: slideshow::Message,
) -> Task<Message> {
    let (effect, task) = ctx.slideshow.handle_message(message);
    let task = task.map(Message::Slideshow);

    match effect {
        slideshow::Effect::None => task,
        slideshow::Effect::Close => {
            tracing::info!("slideshow closed");
            ctx.slideshow.unmount();
            *ctx.screen = Screen::Closed;
            task
        }
        slideshow::Effect::ReachedEnd => {
            tracing::info!("slideshow finished; showing the full comic");
            ctx.slideshow.unmount();
            *ctx.screen = Screen::FinalComic;
            task
        }
    }
}

pub fn handle_final_comic_message(
    ctx: &mut UpdateContext<'_>,
    message: &final_comic::Message,
) -> Task<Message> {
    match final_comic::update(message) {
        final_comic::Event::Replay => ctx.start_slideshow(),
        final_comic::Event::Close => {
            *ctx.screen = Screen::Closed;
            Task::none()
        }
    }
}

pub fn handle_closed_message(ctx: &mut UpdateContext<'_>, message: &closed::Message) -> Task<Message> {
    match closed::update(message) {
        closed::Event::Replay => ctx.start_slideshow(),
        closed::Event::ViewFullComic => {
            *ctx.screen = Screen::FinalComic;
            Task::none()
        }
        closed::Event::Quit => iced::exit(),
    }
}
