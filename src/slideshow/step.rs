// SPDX-License-Identifier: MPL-2.0
//! Step kinds and the next-button label decision table.

use super::layout::FIXED_STEPS_PER_PANEL;

/// What a step reveals within its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepType {
    /// Scene description text.
    Scene,
    /// Panel image.
    Image,
    /// One dialogue line, shown over the panel image.
    Dialogue {
        /// Index into the panel's dialogue lines.
        dialogue_index: usize,
    },
}

impl StepType {
    /// Classifies a step index within a panel.
    #[must_use]
    pub fn from_step_index(step_index: usize) -> Self {
        match step_index {
            0 => Self::Scene,
            1 => Self::Image,
            n => Self::Dialogue {
                dialogue_index: n - FIXED_STEPS_PER_PANEL,
            },
        }
    }

    /// Whether the panel image is visible on this step.
    #[must_use]
    pub fn shows_image(self) -> bool {
        !matches!(self, Self::Scene)
    }
}

/// Label of the "next" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLabel {
    /// Last step of the last panel: hand over to the assembled comic.
    ViewFullComic,
    /// Move on to the next panel's scene.
    NextPanel,
    /// Scene is showing; reveal the image.
    ShowImage,
    /// Image is showing and the panel has dialogue.
    ShowDialogue,
    /// Mid-dialogue.
    NextLine,
}

impl NextLabel {
    /// Picks the label for a step.
    ///
    /// Rows are checked top to bottom; the first match wins.
    ///
    /// | last step | last panel | step     | dialogue | label          |
    /// |-----------|------------|----------|----------|----------------|
    /// | yes       | yes        | any      | any      | ViewFullComic  |
    /// | yes       | no         | any      | any      | NextPanel      |
    /// | no        | any        | Scene    | any      | ShowImage      |
    /// | no        | any        | Image    | 0        | NextPanel      |
    /// | no        | any        | Image    | ≥ 1      | ShowDialogue   |
    /// | no        | any        | Dialogue | any      | NextLine       |
    #[must_use]
    pub fn decide(
        is_last_step: bool,
        is_last_panel: bool,
        step: StepType,
        dialogue_count: usize,
    ) -> Self {
        match (is_last_step, is_last_panel, step, dialogue_count) {
            (true, true, _, _) => Self::ViewFullComic,
            (true, false, _, _) => Self::NextPanel,
            (false, _, StepType::Scene, _) => Self::ShowImage,
            (false, _, StepType::Image, 0) => Self::NextPanel,
            (false, _, StepType::Image, _) => Self::ShowDialogue,
            (false, _, StepType::Dialogue { .. }, _) => Self::NextLine,
        }
    }

    /// Returns the i18n message key for this label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::ViewFullComic => "slideshow-next-view-full-comic",
            Self::NextPanel => "slideshow-next-panel",
            Self::ShowImage => "slideshow-next-show-image",
            Self::ShowDialogue => "slideshow-next-show-dialogue",
            Self::NextLine => "slideshow-next-line",
        }
    }
}
