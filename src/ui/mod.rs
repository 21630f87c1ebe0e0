// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`slideshow`] - Modal step-by-step slideshow over the comic panels
//! - [`final_comic`] - Assembled comic shown once the slideshow ends
//! - [`closed`] - Replay / view full comic choices after dismissal
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod closed;
pub mod design_tokens;
pub mod final_comic;
pub mod slideshow;
pub mod styles;
pub mod theming;
