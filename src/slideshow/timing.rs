// SPDX-License-Identifier: MPL-2.0
//! Delay newtypes and the tokens that identify scheduled completions.
//!
//! The navigator never sleeps. When a delayed state change is needed it hands
//! the host a [`Schedule`]; the host waits `delay` and feeds the token back
//! through [`Navigator::complete`](super::Navigator::complete). Tokens carry
//! the mount session they were issued in, so a completion that arrives after
//! teardown (or after a fresh mount) matches nothing and is dropped.

use crate::config::{
    DEFAULT_REVEAL_DELAY_MS, DEFAULT_TRANSITION_DELAY_MS, MAX_REVEAL_DELAY_MS,
    MAX_TRANSITION_DELAY_MS,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay before the first panel is revealed, in milliseconds.
///
/// Values above the configured maximum are clamped.
///
/// # Example
///
/// ```
/// use panel_reel::slideshow::RevealDelay;
///
/// assert_eq!(RevealDelay::new(250).value(), 250);
/// assert_eq!(RevealDelay::new(60_000).value(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelay(u64);

impl RevealDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_REVEAL_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_DELAY_MS)
    }
}

/// Cross-fade duration of a single step or panel transition, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_TRANSITION_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDelay {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_DELAY_MS)
    }
}

/// Both delays used by one navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub reveal: RevealDelay,
    pub transition: TransitionDelay,
}

/// Which delayed completion a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Reveal,
    Transition,
}

/// Identity of one scheduled completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    session: u64,
    sequence: u64,
    kind: TimerKind,
}

impl TimerToken {
    #[must_use]
    pub fn kind(self) -> TimerKind {
        self.kind
    }
}

/// A request for the host to call back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub token: TimerToken,
    pub delay: Duration,
}

impl Schedule {
    /// Waits out the delay on the tokio timer, then yields the token.
    pub async fn elapsed(self) -> TimerToken {
        tokio::time::sleep(self.delay).await;
        self.token
    }
}

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Issues tokens for one mount session.
#[derive(Debug)]
pub(crate) struct TokenIssuer {
    session: u64,
    sequence: u64,
}

impl TokenIssuer {
    pub(crate) fn new() -> Self {
        Self {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            sequence: 0,
        }
    }

    pub(crate) fn issue(&mut self, kind: TimerKind) -> TimerToken {
        self.sequence += 1;
        TimerToken {
            session: self.session,
            sequence: self.sequence,
            kind,
        }
    }
}
