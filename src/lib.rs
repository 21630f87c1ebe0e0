// SPDX-License-Identifier: MPL-2.0
//! `panel_reel` presents a generated multi-panel comic one reveal step at a
//! time, built with the Iced GUI framework.
//!
//! Each panel unfolds as its scene description, then its image, then its
//! dialogue line by line, with timed transitions between steps. Once the last
//! step is passed the assembled comic is shown in full.

pub mod app;
pub mod comic;
pub mod config;
pub mod error;
pub mod i18n;
pub mod slideshow;
pub mod ui;
