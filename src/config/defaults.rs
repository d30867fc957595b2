// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Timing**: dismiss delay and animation durations
//! - **Layout**: banner insets and internal measurements
//! - **Gesture**: dismiss threshold, resistance damping and fling window
//! - **Diagnostics**: presentation log capacity

use crate::domain::chat_head::newtypes::{
    damping_bounds, dismiss_delay_bounds, fling_bounds, gesture_threshold_bounds,
};
use crate::domain::diagnostics::buffer_capacity_bounds;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a chat head stays up before hiding itself (milliseconds).
pub const DEFAULT_DISMISS_DELAY_MS: u64 = dismiss_delay_bounds::DEFAULT_MS;

/// Slide-in duration (milliseconds). Also used for snap-backs.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 350;

/// Timed hide duration (milliseconds).
pub const DEFAULT_HIDE_DURATION_MS: u64 = 350;

/// Upper bound accepted for reveal and hide durations (milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Distance from the top of the container to the banner.
pub const DEFAULT_INSET_TOP: f32 = 24.0;

/// Resting distance from the container's leading edge.
pub const DEFAULT_INSET_LEFT: f32 = 16.0;

/// Resting distance from the container's trailing edge.
pub const DEFAULT_INSET_RIGHT: f32 = 16.0;

/// Extra distance beyond the banner width used for the off-screen position.
pub const DEFAULT_OFFSCREEN_MARGIN: f32 = 24.0;

/// Avatar diameter.
pub const DEFAULT_IMAGE_DIAMETER: f32 = 32.0;

/// Padding around the avatar; also sets the banner height.
pub const DEFAULT_IMAGE_PADDING: f32 = 12.0;

pub const DEFAULT_CORNER_RADIUS: f32 = 6.0;

/// Container width assumed until the host reports its real size.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 420.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Leftward distance past which releasing a drag dismisses the banner.
pub const DEFAULT_GESTURE_THRESHOLD: f32 = gesture_threshold_bounds::DEFAULT;

/// Damping constant of the rightward resistance curve.
pub const DEFAULT_DAMPING: f32 = damping_bounds::DEFAULT;

/// Shortest fling-out (milliseconds).
pub const DEFAULT_FLING_MIN_MS: u64 = fling_bounds::DEFAULT_MIN_MS;

/// Longest fling-out (milliseconds).
pub const DEFAULT_FLING_MAX_MS: u64 = fling_bounds::DEFAULT_MAX_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of presentation events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DISMISS_DELAY_MS >= dismiss_delay_bounds::MIN_MS);
    assert!(DEFAULT_DISMISS_DELAY_MS <= dismiss_delay_bounds::MAX_MS);

    // The banner must be fully revealed well before it can time out.
    assert!(DEFAULT_REVEAL_DURATION_MS < DEFAULT_DISMISS_DELAY_MS);
    assert!(DEFAULT_REVEAL_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(DEFAULT_HIDE_DURATION_MS <= MAX_ANIMATION_DURATION_MS);

    assert!(DEFAULT_FLING_MIN_MS <= DEFAULT_FLING_MAX_MS);
    assert!(DEFAULT_FLING_MIN_MS >= fling_bounds::FLOOR_MS);
    assert!(DEFAULT_FLING_MAX_MS <= fling_bounds::CEILING_MS);

    assert!(DEFAULT_IMAGE_DIAMETER > 0.0);
    assert!(DEFAULT_IMAGE_PADDING >= 0.0);
    assert!(DEFAULT_CONTAINER_WIDTH > DEFAULT_INSET_LEFT + DEFAULT_INSET_RIGHT);
};
