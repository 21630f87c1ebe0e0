// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.
//!
//! # Categories
//!
//! - **Reveal**: Black placeholder shown when the slideshow opens
//! - **Transition**: Fade gating between two steps

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Delay before the first step is revealed (in milliseconds).
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// Maximum reveal delay (in milliseconds).
pub const MAX_REVEAL_DELAY_MS: u64 = 5000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the transition between two steps (in milliseconds).
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_DELAY_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_REVEAL_DELAY_MS <= MAX_REVEAL_DELAY_MS);
    assert!(DEFAULT_TRANSITION_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(DEFAULT_TRANSITION_DELAY_MS < DEFAULT_REVEAL_DELAY_MS);
};
