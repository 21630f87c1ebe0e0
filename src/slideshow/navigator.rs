// SPDX-License-Identifier: MPL-2.0
//! Slideshow navigation state machine.
//!
//! The navigator owns a single cursor over every reveal step of the comic and
//! gates movement behind timed transitions:
//!
//! ```text
//! mount ──► Revealing ──(reveal delay)──► Ready ◄──(transition delay)── Transitioning
//!                                           │  └──── advance / retreat ────►┘
//!                                           └── advance on final step ──► Ended
//! ```
//!
//! Closing is reachable from every phase and never touches the position; the
//! host decides what to do with the [`Outcome::Close`] it receives.

use super::display::DisplayState;
use super::input::{map_key, Command, Key};
use super::layout::{Position, StepLayout};
use super::timing::{Schedule, TimerKind, TimerToken, Timing, TokenIssuer};
use crate::comic::PanelRecord;
use std::sync::Arc;

/// Lifecycle phase of a mounted navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Black placeholder; waiting for the reveal delay.
    Revealing,
    /// Accepting navigation input.
    Ready,
    /// A step or panel change is pending; input is dropped.
    Transitioning,
    /// The host was told the comic reached its end.
    Ended,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing happened (gated, at the start, or an unhandled key).
    Ignored,
    /// A transition started; the host must call back after the delay.
    Scheduled(Schedule),
    /// Forward past the final step. Emitted once per mount.
    ReachedEnd,
    /// The user asked to dismiss the slideshow.
    Close,
}

/// Result of feeding a timer token back to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The reveal delay elapsed; the first step is now visible.
    Revealed,
    /// A transition landed on a new position.
    Moved(Position),
    /// The token did not match anything pending.
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    token: TimerToken,
    target: usize,
}

/// Step-by-step navigator over a comic's panels.
#[derive(Debug)]
pub struct Navigator {
    panels: Arc<[PanelRecord]>,
    layout: StepLayout,
    cursor: usize,
    phase: Phase,
    timing: Timing,
    tokens: TokenIssuer,
    reveal: Option<TimerToken>,
    pending: Option<PendingTransition>,
}

impl Navigator {
    /// Mounts a navigator at the first step of the first panel.
    ///
    /// Returns the navigator with the reveal schedule the host must honor, or
    /// `None` when there are no panels to show.
    pub fn mount(
        panels: impl Into<Arc<[PanelRecord]>>,
        timing: Timing,
    ) -> Option<(Self, Schedule)> {
        let panels = panels.into();
        if panels.is_empty() {
            tracing::warn!("slideshow mounted without panels; nothing to show");
            return None;
        }

        let layout = StepLayout::new(&panels);
        let mut tokens = TokenIssuer::new();
        let token = tokens.issue(TimerKind::Reveal);
        tracing::debug!(
            panels = panels.len(),
            steps = layout.total_steps(),
            "slideshow mounted"
        );

        let navigator = Self {
            panels,
            layout,
            cursor: 0,
            phase: Phase::Revealing,
            timing,
            tokens,
            reveal: Some(token),
            pending: None,
        };
        let schedule = Schedule {
            token,
            delay: timing.reveal.as_duration(),
        };
        Some((navigator, schedule))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.layout.locate(self.cursor)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase != Phase::Revealing
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    #[must_use]
    pub fn panels(&self) -> &[PanelRecord] {
        &self.panels
    }

    #[must_use]
    pub fn layout(&self) -> &StepLayout {
        &self.layout
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Number of reveal steps in the panel at `panel_index`.
    #[must_use]
    pub fn steps_for_panel(&self, panel_index: usize) -> usize {
        self.layout.steps_in(panel_index)
    }

    /// Derived view of the current position.
    #[must_use]
    pub fn display(&self) -> DisplayState<'_> {
        DisplayState::derive(
            &self.panels,
            &self.layout,
            self.cursor,
            self.is_revealed(),
            self.is_transitioning(),
        )
    }

    /// Moves one step forward, or reports the end of the comic.
    pub fn advance(&mut self) -> Outcome {
        if self.phase != Phase::Ready {
            tracing::trace!(phase = ?self.phase, "advance dropped");
            return Outcome::Ignored;
        }

        if self.layout.is_final_step(self.cursor) {
            self.phase = Phase::Ended;
            tracing::info!("slideshow reached its final step");
            return Outcome::ReachedEnd;
        }

        Outcome::Scheduled(self.begin_transition(self.cursor + 1))
    }

    /// Moves one step back. Crossing a panel boundary lands on the previous
    /// panel's last step.
    pub fn retreat(&mut self) -> Outcome {
        if self.phase != Phase::Ready {
            tracing::trace!(phase = ?self.phase, "retreat dropped");
            return Outcome::Ignored;
        }

        if self.cursor == 0 {
            return Outcome::Ignored;
        }

        Outcome::Scheduled(self.begin_transition(self.cursor - 1))
    }

    /// Applies a navigation command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Close => {
                tracing::info!(position = ?self.position(), "slideshow close requested");
                Outcome::Close
            }
        }
    }

    /// Maps a key press and applies the resulting command.
    pub fn handle_key(&mut self, key: Key) -> Outcome {
        match map_key(key) {
            Some(command) => self.apply(command),
            None => Outcome::Ignored,
        }
    }

    /// Applies a delayed completion if `token` is the one currently pending.
    pub fn complete(&mut self, token: TimerToken) -> Completion {
        match token.kind() {
            TimerKind::Reveal if self.reveal == Some(token) => {
                self.reveal = None;
                if self.phase == Phase::Revealing {
                    self.phase = Phase::Ready;
                }
                tracing::debug!("slideshow revealed");
                Completion::Revealed
            }
            TimerKind::Transition => match self.pending {
                Some(pending) if pending.token == token => {
                    self.pending = None;
                    self.cursor = pending.target;
                    self.phase = Phase::Ready;
                    let position = self.position();
                    tracing::debug!(?position, "transition landed");
                    Completion::Moved(position)
                }
                _ => Completion::Stale,
            },
            TimerKind::Reveal => Completion::Stale,
        }
    }

    /// Cancels every outstanding timer. Late completions become no-ops.
    pub fn teardown(&mut self) {
        if self.reveal.take().is_some() || self.pending.take().is_some() {
            tracing::debug!("slideshow torn down with timers pending");
        }
        if self.phase == Phase::Transitioning {
            self.phase = Phase::Ready;
        }
    }

    fn begin_transition(&mut self, target: usize) -> Schedule {
        let token = self.tokens.issue(TimerKind::Transition);
        self.phase = Phase::Transitioning;
        self.pending = Some(PendingTransition { token, target });
        tracing::debug!(
            from = ?self.position(),
            to = ?self.layout.locate(target),
            "transition started"
        );
        Schedule {
            token,
            delay: self.timing.transition.as_duration(),
        }
    }
}
