// SPDX-License-Identifier: MPL-2.0
//! Drag interpreter for the chat head pan gesture.
//!
//! Pure functions mapping raw pan input to banner displacement, the
//! dismiss/snap-back decision on release and the fling-out duration.
//! Negative `dx` points in the dismiss direction (leftward).

use crate::domain::chat_head::{DampingFactor, FlingWindow, GestureThreshold};
use iced::Vector;
use std::time::Duration;

/// Speeds below this (units per second) count as "not moving".
const MIN_FLING_SPEED: f32 = 1e-3;

/// Phase of a pan gesture session.
///
/// Sessions are `Began`, any number of `Changed`, then `Ended` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// The recognizer gave up (failed, interrupted, pointer left the surface).
    Cancelled,
}

/// Per-frame pan input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    /// Cumulative translation since the gesture began.
    pub translation: Vector,
    /// Instantaneous velocity, in units per second.
    pub velocity: Vector,
}

impl GestureSample {
    #[must_use]
    pub fn new(translation: Vector, velocity: Vector) -> Self {
        Self {
            translation,
            velocity,
        }
    }

    /// Sample with only a horizontal component.
    #[must_use]
    pub fn horizontal(dx: f32, velocity_x: f32) -> Self {
        Self::new(Vector::new(dx, 0.0), Vector::new(velocity_x, 0.0))
    }
}

/// One pan gesture callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub sample: GestureSample,
}

impl GestureEvent {
    #[must_use]
    pub fn new(phase: GesturePhase, sample: GestureSample) -> Self {
        Self { phase, sample }
    }

    #[must_use]
    pub fn began() -> Self {
        Self::new(GesturePhase::Began, GestureSample::default())
    }

    #[must_use]
    pub fn changed(dx: f32) -> Self {
        Self::new(GesturePhase::Changed, GestureSample::horizontal(dx, 0.0))
    }

    #[must_use]
    pub fn ended(dx: f32, velocity_x: f32) -> Self {
        Self::new(GesturePhase::Ended, GestureSample::horizontal(dx, velocity_x))
    }

    #[must_use]
    pub fn cancelled(dx: f32) -> Self {
        Self::new(GesturePhase::Cancelled, GestureSample::horizontal(dx, 0.0))
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResolution {
    /// Throw the banner off screen.
    Dismiss,
    /// Return the banner to its resting offset.
    SnapBack,
}

/// Banner displacement for a horizontal drag of `dx`.
///
/// Toward the dismiss direction the banner follows the pointer 1:1. The
/// other way it is damped by `(1 − 1/(dx·k/width + 1))·width`, which grows
/// with `dx` but never reaches `width`.
#[must_use]
pub fn resistance_offset(dx: f32, container_width: f32, damping: DampingFactor) -> f32 {
    if dx < 0.0 {
        return dx;
    }
    if dx.is_nan() || container_width <= 0.0 || !container_width.is_finite() {
        return 0.0;
    }
    // Same curve, written as pull / (pull + width) · width.
    let pull = dx * damping.value();
    let limit = container_width.next_down();
    if !pull.is_finite() {
        return limit;
    }
    (pull / (pull + container_width) * container_width).min(limit)
}

/// Decides what happens when a drag ends at `dx`.
///
/// Only drags past the threshold in the dismiss direction discard the
/// banner; velocity plays no part in the decision.
#[must_use]
pub fn resolve_release(dx: f32, threshold: GestureThreshold) -> DragResolution {
    if dx < 0.0 && dx.abs() > threshold.value() {
        DragResolution::Dismiss
    } else {
        DragResolution::SnapBack
    }
}

/// Time for the banner to leave the screen at the release velocity,
/// `(width − |dx|) / |vx|`, clamped into `window`.
#[must_use]
pub fn fling_duration(
    container_width: f32,
    dx: f32,
    velocity_x: f32,
    window: FlingWindow,
) -> Duration {
    let speed = velocity_x.abs();
    if !speed.is_finite() || speed < MIN_FLING_SPEED {
        return window.max();
    }
    let remaining = (container_width - dx.abs()).max(0.0);
    let secs = remaining / speed;
    if !secs.is_finite() {
        return window.max();
    }
    window.clamp(Duration::from_secs_f32(secs))
}
