// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the slideshow and the
//! screens around it.
//!
//! The `App` struct wires together the loaded comic, localization, and
//! settings, and reacts to the slideshow's effects: closing leads to the
//! closed screen, reaching the end leads to the full comic.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::comic::{self, Comic};
use crate::config;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::slideshow::Timing;
use crate::ui::slideshow;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    comic: Option<Comic>,
    slideshow: slideshow::State,
    theme_mode: ThemeMode,
    timing: Timing,
    load_error: Option<Error>,
    /// i18n key of a settings warning raised at startup.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("comic", &self.comic.as_ref().map(|comic| &comic.title))
            .field("slideshow_mounted", &self.slideshow.is_mounted())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            comic: None,
            slideshow: slideshow::State::default(),
            theme_mode: ThemeMode::System,
            timing: Timing::default(),
            load_error: None,
            config_warning: None,
        }
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || match boot_state.borrow_mut().take() {
        Some(flags) => App::new(flags),
        None => (App::default(), Task::none()),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, picks the locale, and starts reading the comic.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            timing: config.slideshow.timing(),
            config_warning,
            ..Self::default()
        };

        let task = Task::perform(load_comic(flags.comic_path), Message::ComicLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        match &self.comic {
            Some(comic) => self
                .i18n
                .tr_with_args("window-title-comic", &[("title", &comic.title)]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            comic: &mut self.comic,
            slideshow: &mut self.slideshow,
            load_error: &mut self.load_error,
            timing: self.timing,
        };

        match message {
            Message::ComicLoaded(result) => update::handle_comic_loaded(&mut ctx, result),
            Message::Slideshow(message) => update::handle_slideshow_message(&mut ctx, message),
            Message::FinalComic(message) => update::handle_final_comic_message(&mut ctx, &message),
            Message::Closed(message) => update::handle_closed_message(&mut ctx, &message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            comic: self.comic.as_ref(),
            slideshow: &self.slideshow,
            load_error: self.load_error.as_ref(),
            config_warning: self.config_warning.as_deref(),
        })
    }
}

/// Reads the comic off the UI thread.
async fn load_comic(path: PathBuf) -> Result<Comic> {
    tokio::task::spawn_blocking(move || comic::load(&path))
        .await
        .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
}
