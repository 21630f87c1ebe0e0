// SPDX-License-Identifier: MPL-2.0
//! Step-by-step slideshow core.
//!
//! Each panel of a comic expands into reveal steps: its scene description, its
//! image, then one step per dialogue line. [`Navigator`] walks those steps
//! with timed transitions, and [`DisplayState`] derives everything the
//! surface shows from the current position. Nothing in this module touches
//! the GUI toolkit.

pub mod display;
pub mod input;
pub mod layout;
pub mod navigator;
pub mod step;
pub mod timing;

pub use display::{Counter, DisplayState, StepContent};
pub use input::{map_key, Command, Key};
pub use layout::{steps_for_panel, Position, StepLayout};
pub use navigator::{Completion, Navigator, Outcome, Phase};
pub use step::{NextLabel, StepType};
pub use timing::{RevealDelay, Schedule, TimerKind, TimerToken, Timing, TransitionDelay};
