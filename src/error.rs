// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The comic manifest could not be parsed.
    #[error("Manifest Error: {0}")]
    Manifest(String),

    /// The script text contained no usable panel.
    #[error("Script Error: {0}")]
    Script(String),

    /// A comic source parsed correctly but holds no panels.
    #[error("Comic has no panels")]
    EmptyComic,

    /// The path given on the command line is not a manifest, script, or
    /// output directory.
    #[error("Unsupported comic source: {}", .0.display())]
    UnsupportedSource(PathBuf),
}

impl Error {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Config(_) => "error-load-config",
            Error::Manifest(_) => "error-load-manifest",
            Error::Script(_) => "error-load-script",
            Error::EmptyComic => "error-load-empty-comic",
            Error::UnsupportedSource(_) => "error-load-unsupported-source",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
