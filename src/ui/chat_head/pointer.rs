// SPDX-License-Identifier: MPL-2.0
//! Pan recognizer for mouse-driven chat heads.
//!
//! Turns press / move / release into the gesture stream the controller
//! expects. A press that never travels farther than the slop distance is a
//! tap instead of a drag.

use crate::presentation::{GestureEvent, GesturePhase, GestureSample};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Movement (in logical pixels) below which a press is still a tap.
pub const DEFAULT_SLOP: f32 = 6.0;

/// Weight of the newest sample in the velocity estimate.
const VELOCITY_SMOOTHING: f32 = 0.7;

/// A release this long after the last movement carries no velocity.
const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// What a pointer release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The press ended a drag.
    Gesture(GestureEvent),
    /// The press never moved past the slop distance.
    Tap,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    last: Point,
    last_at: Instant,
    velocity: Vector,
    dragging: bool,
}

/// Tracks one pointer press at a time.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    slop: f32,
    press: Option<Press>,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SLOP)
    }
}

impl PanRecognizer {
    #[must_use]
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            press: None,
        }
    }

    /// Returns true between a press and its release or cancellation.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Returns true once the current press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Starts tracking a press. A press already in progress is dropped.
    pub fn press(&mut self, position: Point, at: Instant) {
        self.press = Some(Press {
            origin: position,
            last: position,
            last_at: at,
            velocity: Vector::ZERO,
            dragging: false,
        });
    }

    /// Feeds a pointer move.
    ///
    /// Emits `Began` when the press first leaves the slop radius and
    /// `Changed` for every move after that.
    pub fn moved(&mut self, position: Point, at: Instant) -> Option<GestureEvent> {
        let slop = self.slop;
        let press = self.press.as_mut()?;
        update_velocity(press, position, at);

        let translation = position - press.origin;
        if press.dragging {
            return Some(GestureEvent::new(
                GesturePhase::Changed,
                GestureSample::new(translation, press.velocity),
            ));
        }
        if translation.x.hypot(translation.y) > slop {
            press.dragging = true;
            return Some(GestureEvent::began());
        }
        None
    }

    /// Ends the press.
    pub fn release(&mut self, position: Point, at: Instant) -> Option<Release> {
        let mut press = self.press.take()?;
        if !press.dragging {
            return Some(Release::Tap);
        }
        if at.saturating_duration_since(press.last_at) > VELOCITY_STALE_AFTER {
            press.velocity = Vector::ZERO;
        } else {
            update_velocity(&mut press, position, at);
        }
        Some(Release::Gesture(GestureEvent::new(
            GesturePhase::Ended,
            GestureSample::new(position - press.origin, press.velocity),
        )))
    }

    /// Abandons the press, e.g. when the pointer leaves the window.
    ///
    /// Emits `Cancelled` only if a drag was in progress.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let press = self.press.take()?;
        press.dragging.then(|| {
            GestureEvent::new(
                GesturePhase::Cancelled,
                GestureSample::new(press.last - press.origin, Vector::ZERO),
            )
        })
    }
}

fn update_velocity(press: &mut Press, position: Point, at: Instant) {
    let dt = at.saturating_duration_since(press.last_at).as_secs_f32();
    if dt > 0.0 {
        let delta = position - press.last;
        let instant = Vector::new(delta.x / dt, delta.y / dt);
        press.velocity = Vector::new(
            press.velocity.x + (instant.x - press.velocity.x) * VELOCITY_SMOOTHING,
            press.velocity.y + (instant.y - press.velocity.y) * VELOCITY_SMOOTHING,
        );
        press.last_at = at;
    }
    press.last = position;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn short_press_is_a_tap() {
        let t0 = Instant::now();
        let mut recognizer = PanRecognizer::default();
        recognizer.press(Point::new(50.0, 20.0), t0);
        assert_eq!(recognizer.moved(Point::new(52.0, 21.0), t0 + ms(10)), None);
        assert_eq!(
            recognizer.release(Point::new(52.0, 21.0), t0 + ms(20)),
            Some(Release::Tap)
        );
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn drag_emits_began_then_changed_then_ended() {
        let t0 = Instant::now();
        let mut recognizer = PanRecognizer::default();
        recognizer.press(Point::new(100.0, 20.0), t0);

        let began = recognizer
            .moved(Point::new(90.0, 20.0), t0 + ms(16))
            .expect("crossing slop should begin");
        assert_eq!(began.phase, GesturePhase::Began);
        assert!(recognizer.is_dragging());

        let changed = recognizer
            .moved(Point::new(60.0, 20.0), t0 + ms(32))
            .expect("drag should report changes");
        assert_eq!(changed.phase, GesturePhase::Changed);
        assert_eq!(changed.sample.translation.x, -40.0);

        match recognizer.release(Point::new(40.0, 20.0), t0 + ms(48)) {
            Some(Release::Gesture(ended)) => {
                assert_eq!(ended.phase, GesturePhase::Ended);
                assert_eq!(ended.sample.translation.x, -60.0);
                assert!(ended.sample.velocity.x < 0.0);
            }
            other => panic!("expected ended gesture, got {other:?}"),
        }
    }

    #[test]
    fn late_release_has_no_velocity() {
        let t0 = Instant::now();
        let mut recognizer = PanRecognizer::default();
        recognizer.press(Point::new(100.0, 0.0), t0);
        recognizer.moved(Point::new(50.0, 0.0), t0 + ms(16));

        match recognizer.release(Point::new(50.0, 0.0), t0 + ms(500)) {
            Some(Release::Gesture(ended)) => assert_eq!(ended.sample.velocity, Vector::ZERO),
            other => panic!("expected ended gesture, got {other:?}"),
        }
    }

    #[test]
    fn cancel_reports_only_active_drags() {
        let t0 = Instant::now();
        let mut recognizer = PanRecognizer::default();
        recognizer.press(Point::ORIGIN, t0);
        assert_eq!(recognizer.cancel(), None);

        recognizer.press(Point::ORIGIN, t0);
        recognizer.moved(Point::new(-30.0, 0.0), t0 + ms(16));
        let cancelled = recognizer.cancel().expect("drag should cancel");
        assert_eq!(cancelled.phase, GesturePhase::Cancelled);
        assert_eq!(cancelled.sample.translation.x, -30.0);
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut recognizer = PanRecognizer::default();
        assert_eq!(recognizer.moved(Point::new(10.0, 10.0), Instant::now()), None);
        assert_eq!(recognizer.release(Point::ORIGIN, Instant::now()), None);
    }
}
