// SPDX-License-Identifier: MPL-2.0
//! Chat head newtypes.
//!
//! This module provides type-safe wrappers for presentation tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Dismiss Delay
// =============================================================================

/// Dismiss delay bounds (1 to 30 seconds, in milliseconds).
pub mod dismiss_delay_bounds {
    /// Minimum dismiss delay in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum dismiss delay in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default dismiss delay in milliseconds.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// How long a chat head stays on screen before hiding itself.
///
/// # Example
///
/// ```
/// use chat_heads::domain::chat_head::DismissDelay;
/// use std::time::Duration;
///
/// assert_eq!(DismissDelay::new(4_000).as_duration(), Duration::from_secs(4));
/// // Values outside range are clamped
/// assert_eq!(DismissDelay::new(10).value(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u64);

impl DismissDelay {
    /// Creates a new dismiss delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(dismiss_delay_bounds::MIN_MS, dismiss_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(dismiss_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Gesture Threshold
// =============================================================================

/// Gesture threshold bounds (horizontal distance, in layout units).
pub mod gesture_threshold_bounds {
    /// Minimum distance a drag must travel to dismiss.
    pub const MIN: f32 = 10.0;
    /// Maximum distance.
    pub const MAX: f32 = 400.0;
    /// Default distance.
    pub const DEFAULT: f32 = 80.0;
}

/// Distance a drag must travel in the dismiss direction to discard the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThreshold(f32);

impl GestureThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if !distance.is_finite() {
            return Self::default();
        }
        Self(distance.clamp(gesture_threshold_bounds::MIN, gesture_threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for GestureThreshold {
    fn default() -> Self {
        Self(gesture_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Damping Factor
// =============================================================================

/// Damping factor bounds for the drag resistance curve.
pub mod damping_bounds {
    pub const MIN: f32 = 0.01;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.15;
}

/// Damping constant `k` of the resistance curve applied when dragging away
/// from the dismiss direction. Smaller values resist harder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingFactor(f32);

impl DampingFactor {
    /// Creates a new damping factor, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(damping_bounds::MIN, damping_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DampingFactor {
    fn default() -> Self {
        Self(damping_bounds::DEFAULT)
    }
}

// =============================================================================
// Fling Window
// =============================================================================

/// Fling-out duration bounds, in milliseconds.
pub mod fling_bounds {
    /// Shortest fling-out the window may be configured with.
    pub const FLOOR_MS: u64 = 10;
    /// Longest fling-out the window may be configured with.
    pub const CEILING_MS: u64 = 1_000;
    /// Default lower end of the window.
    pub const DEFAULT_MIN_MS: u64 = 50;
    /// Default upper end of the window.
    pub const DEFAULT_MAX_MS: u64 = 200;
}

/// Allowed range for velocity-derived fling-out durations.
///
/// Guarantees `min <= max`; a reversed pair is swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlingWindow {
    min: Duration,
    max: Duration,
}

impl FlingWindow {
    /// Creates a new window from millisecond bounds, clamping both ends.
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        let clamp = |ms: u64| ms.clamp(fling_bounds::FLOOR_MS, fling_bounds::CEILING_MS);
        let (lo, hi) = (clamp(min_ms), clamp(max_ms));
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        Self {
            min: Duration::from_millis(lo),
            max: Duration::from_millis(hi),
        }
    }

    #[must_use]
    pub fn min(self) -> Duration {
        self.min
    }

    #[must_use]
    pub fn max(self) -> Duration {
        self.max
    }

    /// Clamps a duration into the window.
    #[must_use]
    pub fn clamp(self, duration: Duration) -> Duration {
        duration.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, duration: Duration) -> bool {
        duration >= self.min && duration <= self.max
    }
}

impl Default for FlingWindow {
    fn default() -> Self {
        Self::new(fling_bounds::DEFAULT_MIN_MS, fling_bounds::DEFAULT_MAX_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_delay_clamps_to_valid_range() {
        assert_eq!(DismissDelay::new(0).value(), dismiss_delay_bounds::MIN_MS);
        assert_eq!(
            DismissDelay::new(u64::MAX).value(),
            dismiss_delay_bounds::MAX_MS
        );
        assert_eq!(DismissDelay::new(2_500).value(), 2_500);
    }

    #[test]
    fn dismiss_delay_default() {
        assert_eq!(
            DismissDelay::default().as_duration(),
            Duration::from_millis(dismiss_delay_bounds::DEFAULT_MS)
        );
    }

    #[test]
    fn gesture_threshold_clamps_and_rejects_nan() {
        assert_eq!(GestureThreshold::new(1.0).value(), gesture_threshold_bounds::MIN);
        assert_eq!(GestureThreshold::new(9_999.0).value(), gesture_threshold_bounds::MAX);
        assert_eq!(GestureThreshold::new(f32::NAN), GestureThreshold::default());
    }

    #[test]
    fn damping_factor_clamps() {
        assert_eq!(DampingFactor::new(0.0).value(), damping_bounds::MIN);
        assert_eq!(DampingFactor::new(5.0).value(), damping_bounds::MAX);
        assert_eq!(DampingFactor::new(0.3).value(), 0.3);
    }

    #[test]
    fn fling_window_orders_bounds() {
        let window = FlingWindow::new(300, 100);
        assert_eq!(window.min(), Duration::from_millis(100));
        assert_eq!(window.max(), Duration::from_millis(300));
    }

    #[test]
    fn fling_window_clamp() {
        let window = FlingWindow::default();
        assert_eq!(window.clamp(Duration::ZERO), Duration::from_millis(50));
        assert_eq!(window.clamp(Duration::from_secs(5)), Duration::from_millis(200));
        assert!(window.contains(Duration::from_millis(120)));
    }
}
