// SPDX-License-Identifier: MPL-2.0
//! Modal slideshow surface over the navigator in [`crate::slideshow`].

pub mod component;
mod view;

pub use component::{Effect, Message, State};
