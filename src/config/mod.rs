// SPDX-License-Identifier: MPL-2.0
//! Loading user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slideshow]` - Reveal and transition delays
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `PANEL_REEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use panel_reel::config;
//!
//! let (config, _warning) = config::load();
//! let timing = config.slideshow.timing();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::slideshow::{RevealDelay, Timing, TransitionDelay};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Slideshow pacing.
///
/// Out-of-range values are clamped when converted into [`Timing`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: Option<u64>,

    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

impl SlideshowConfig {
    /// Converts the stored delays into clamped slideshow timing.
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            reveal: self
                .reveal_delay_ms
                .map(RevealDelay::new)
                .unwrap_or_default(),
            transition: self
                .transition_delay_ms
                .map(TransitionDelay::new)
                .unwrap_or_default(),
        }
    }
}

/// Complete user configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_reveal_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_transition_delay_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "configuration loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid configuration; using defaults");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
