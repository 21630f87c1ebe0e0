// SPDX-License-Identifier: MPL-2.0
//! Display state derived from the navigator's cursor.
//!
//! Everything the surface renders is computed here from the current position;
//! nothing is cached across positions.

use super::layout::{Position, StepLayout};
use super::step::{NextLabel, StepType};
use crate::comic::PanelRecord;
use std::path::Path;

/// A 1-based "n of total" counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub current: usize,
    pub total: usize,
}

/// Content visible for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepContent<'a> {
    Scene { text: &'a str },
    Image { image: &'a Path },
    Dialogue { image: &'a Path, line: &'a str },
}

impl<'a> StepContent<'a> {
    /// Panel image, when the step shows it.
    #[must_use]
    pub fn image(&self) -> Option<&'a Path> {
        match *self {
            Self::Scene { .. } => None,
            Self::Image { image } | Self::Dialogue { image, .. } => Some(image),
        }
    }
}

/// Snapshot of what the slideshow shows at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState<'a> {
    pub position: Position,
    pub panel: &'a PanelRecord,
    pub step: StepType,
    pub content: StepContent<'a>,
    /// Narration caption, only while the image is visible.
    pub narration: Option<&'a str>,
    pub can_go_back: bool,
    pub next_label: NextLabel,
    /// Step within the current panel.
    pub step_counter: Counter,
    /// Uses the panel's display number rather than its index.
    pub panel_counter: Counter,
    pub is_revealed: bool,
    pub is_transitioning: bool,
}

impl<'a> DisplayState<'a> {
    /// Derives the display state for `cursor`.
    ///
    /// `panels` must be the slice `layout` was built from and must not be
    /// empty. Only [`Navigator`](super::Navigator) holds a matching pair, so
    /// callers outside the crate go through [`Navigator::display`](super::Navigator::display).
    #[must_use]
    pub(crate) fn derive(
        panels: &'a [PanelRecord],
        layout: &StepLayout,
        cursor: usize,
        is_revealed: bool,
        is_transitioning: bool,
    ) -> Self {
        let position = layout.locate(cursor);
        let panel = &panels[position.panel_index];
        let max_steps = layout.steps_in(position.panel_index);
        let step = StepType::from_step_index(position.step_index);

        let content = match step {
            StepType::Scene => StepContent::Scene {
                text: &panel.scene_description,
            },
            StepType::Image => StepContent::Image {
                image: &panel.image,
            },
            StepType::Dialogue { dialogue_index } => StepContent::Dialogue {
                image: &panel.image,
                line: &panel.dialogue[dialogue_index],
            },
        };

        let is_last_step = position.step_index + 1 == max_steps;
        let is_last_panel = position.panel_index + 1 == panels.len();

        Self {
            position,
            panel,
            step,
            content,
            narration: if step.shows_image() {
                panel.narration.as_deref()
            } else {
                None
            },
            can_go_back: position.panel_index > 0 || position.step_index > 0,
            next_label: NextLabel::decide(
                is_last_step,
                is_last_panel,
                step,
                panel.dialogue.len(),
            ),
            step_counter: Counter {
                current: position.step_index + 1,
                total: max_steps,
            },
            panel_counter: Counter {
                current: panel.panel_number as usize,
                total: panels.len(),
            },
            is_revealed,
            is_transitioning,
        }
    }
}
