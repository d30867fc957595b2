// SPDX-License-Identifier: MPL-2.0
//! Animation driver for the chat head offset and opacity.
//!
//! Only one animation owns the banner at a time. Starting a new one replaces
//! whatever was in flight, continuing from wherever the caller says the
//! banner currently is; nothing is queued.

use std::time::{Duration, Instant};

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, long gentle settle. Used for reveals and snap-backs.
    EaseOutExpo,
    /// Slow start, accelerating exit. Used for timed hides.
    EaseInExpo,
    /// Mild acceleration. Used for fling-outs.
    EaseInQuad,
}

impl Easing {
    /// Applies the curve to `t`, clamped to `[0, 1]`. Exact at both ends.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOutExpo => 1.0 - 2f32.powf(-10.0 * t),
            Easing::EaseInExpo => 2f32.powf(10.0 * (t - 1.0)),
            Easing::EaseInQuad => t * t,
        }
    }
}

/// Animated properties of the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerFrame {
    /// Horizontal position of the banner's leading edge.
    pub offset: f32,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
}

impl BannerFrame {
    #[must_use]
    pub fn new(offset: f32, opacity: f32) -> Self {
        Self {
            offset,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    fn lerp(self, to: Self, progress: f32) -> Self {
        Self {
            offset: self.offset + (to.offset - self.offset) * progress,
            opacity: (self.opacity + (to.opacity - self.opacity) * progress).clamp(0.0, 1.0),
        }
    }
}

/// Why an animation was started; decides what its completion means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Reveal,
    SnapBack,
    Hide,
    FlingOut,
}

impl AnimationKind {
    /// Returns true if the banner is removed when this animation finishes.
    #[must_use]
    pub fn removes_banner(self) -> bool {
        matches!(self, AnimationKind::Hide | AnimationKind::FlingOut)
    }
}

/// Identifies one started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// A single tween between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub kind: AnimationKind,
    pub from: BannerFrame,
    pub to: BannerFrame,
    pub duration: Duration,
    pub easing: Easing,
    pub started_at: Instant,
}

impl Animation {
    /// Linear progress at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn frame_at(&self, now: Instant) -> BannerFrame {
        let eased = self.easing.apply(self.progress(now));
        self.from.lerp(self.to, eased)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Finished animation handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finished {
    pub kind: AnimationKind,
    /// Exact target frame, free of interpolation error.
    pub to: BannerFrame,
}

/// Owns the in-flight animation, if any.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    current: Option<(AnimationId, Animation)>,
    next_id: u64,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `animation`, overriding any animation still in flight.
    pub fn start(&mut self, animation: Animation) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);
        self.current = Some((id, animation));
        id
    }

    /// Drops the in-flight animation without completing it.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<AnimationId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Animation> {
        self.current.as_ref().map(|(_, animation)| animation)
    }

    /// Interpolated frame at `now`, if an animation is running.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Option<BannerFrame> {
        self.current
            .as_ref()
            .map(|(_, animation)| animation.frame_at(now))
    }

    /// Removes and reports the in-flight animation once it has finished.
    pub fn poll_finished(&mut self, now: Instant) -> Option<Finished> {
        let (_, animation) = self.current?;
        if !animation.is_finished(now) {
            return None;
        }
        self.current = None;
        Some(Finished {
            kind: animation.kind,
            to: animation.to,
        })
    }
}
