// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The comic is being read from disk.
    #[default]
    Loading,
    Slideshow,
    FinalComic,
    Closed,
    /// The comic could not be opened.
    Failed,
}
