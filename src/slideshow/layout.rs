// SPDX-License-Identifier: MPL-2.0
//! Flat step layout for a comic.
//!
//! Every panel expands into `2 + dialogue.len()` reveal steps (scene, image,
//! then one step per dialogue line). The navigator keeps a single global
//! cursor over all of those steps; [`StepLayout`] converts between that cursor
//! and the `(panel_index, step_index)` view the UI renders.

use crate::comic::PanelRecord;

/// Steps every panel has before its dialogue lines: the scene and the image.
pub const FIXED_STEPS_PER_PANEL: usize = 2;

/// Number of reveal steps a panel expands into.
#[must_use]
pub fn steps_for_panel(panel: &PanelRecord) -> usize {
    FIXED_STEPS_PER_PANEL + panel.dialogue.len()
}

/// Position expressed on both navigation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub panel_index: usize,
    pub step_index: usize,
}

impl Position {
    #[must_use]
    pub const fn new(panel_index: usize, step_index: usize) -> Self {
        Self {
            panel_index,
            step_index,
        }
    }
}

/// Prefix-sum table mapping panels to their first global step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLayout {
    /// `starts[i]` is the global cursor of panel `i`'s scene step.
    starts: Vec<usize>,
    total: usize,
}

impl StepLayout {
    /// Builds the layout for the given panels.
    #[must_use]
    pub fn new(panels: &[PanelRecord]) -> Self {
        let mut starts = Vec::with_capacity(panels.len());
        let mut total = 0;
        for panel in panels {
            starts.push(total);
            total += steps_for_panel(panel);
        }
        Self { starts, total }
    }

    /// Total number of steps across all panels.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.starts.len()
    }

    /// Number of steps in the panel at `panel_index`.
    ///
    /// Returns 0 for an index outside the layout.
    #[must_use]
    pub fn steps_in(&self, panel_index: usize) -> usize {
        match self.starts.get(panel_index) {
            Some(&start) => {
                let end = self
                    .starts
                    .get(panel_index + 1)
                    .copied()
                    .unwrap_or(self.total);
                end - start
            }
            None => 0,
        }
    }

    /// Converts a global cursor into a two-axis position.
    ///
    /// Cursors past the end are clamped to the last step.
    #[must_use]
    pub fn locate(&self, cursor: usize) -> Position {
        if self.total == 0 {
            return Position::default();
        }
        let cursor = cursor.min(self.total - 1);
        // Index of the last panel whose start is <= cursor.
        let panel_index = self.starts.partition_point(|&start| start <= cursor) - 1;
        Position::new(panel_index, cursor - self.starts[panel_index])
    }

    /// Converts a two-axis position back into a global cursor.
    ///
    /// Returns `None` when the position lies outside the layout.
    #[must_use]
    pub fn cursor_of(&self, position: Position) -> Option<usize> {
        let start = *self.starts.get(position.panel_index)?;
        (position.step_index < self.steps_in(position.panel_index))
            .then_some(start + position.step_index)
    }

    /// Whether the cursor sits on the final step of its panel.
    #[must_use]
    pub fn is_last_step_of_panel(&self, cursor: usize) -> bool {
        let position = self.locate(cursor);
        position.step_index + 1 == self.steps_in(position.panel_index)
    }

    /// Whether the cursor sits on the final step of the whole comic.
    #[must_use]
    pub fn is_final_step(&self, cursor: usize) -> bool {
        cursor + 1 >= self.total
    }
}
