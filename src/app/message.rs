// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::comic::Comic;
use crate::error::Error;
use crate::ui::{closed, final_comic, slideshow};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ComicLoaded(Result<Comic, Error>),
    Slideshow(slideshow::Message),
    FinalComic(final_comic::Message),
    Closed(closed::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest, script, or output directory to open.
    pub comic_path: PathBuf,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PANEL_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
