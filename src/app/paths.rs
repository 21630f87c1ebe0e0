// SPDX-License-Identifier: MPL-2.0
//! Location of the configuration directory.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`]
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_override`]
//! 3. **Environment variable** `PANEL_REEL_CONFIG_DIR`
//! 4. **Platform default** - via `dirs`:
//!    - Linux: `~/.config/PanelReel/`
//!    - macOS: `~/Library/Application Support/PanelReel/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\PanelReel\`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PanelReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PANEL_REEL_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<PathBuf>) {
    if CLI_CONFIG_DIR.set(config_dir).is_err() {
        tracing::warn!("config dir override already initialized; ignoring");
    }
}

/// Returns the application config directory, or `None` if the platform has
/// no config directory. `override_path` takes priority over everything else.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
