// SPDX-License-Identifier: MPL-2.0
//! End-to-end presentation cycles driven through the public controller API.

use chat_heads::domain::chat_head::{ContentDescriptor, ContentId, PresentationState};
use chat_heads::presentation::{
    gesture, BannerId, BannerView, Controller, Delegate, GestureEvent, PresentationSettings,
};
use std::time::{Duration, Instant};

const WIDTH: f32 = 400.0;

#[derive(Debug, Default)]
struct Selections(Vec<ContentId>);

impl Delegate for Selections {
    fn did_select(&mut self, content_id: &ContentId) {
        self.0.push(content_id.clone());
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}

fn content(id: &str) -> ContentDescriptor {
    ContentDescriptor::new(id, "conv", "Team", "sender", "Grace Hopper").with_summary("ping")
}

fn controller() -> Controller<Selections> {
    Controller::new(
        PresentationSettings::default().with_container_width(WIDTH),
        Selections::default(),
    )
}

fn live_id(controller: &Controller<Selections>) -> BannerId {
    controller.banner().map(BannerView::id).expect("banner should be live")
}

/// Displays `content("msg")` at `t0` and completes the reveal.
fn visible_at(t0: Instant) -> Controller<Selections> {
    let mut controller = controller();
    assert!(controller.try_display(content("msg"), t0));
    assert_eq!(controller.state(), PresentationState::Showing);
    controller.tick(t0 + ms(400));
    assert_eq!(controller.state(), PresentationState::Visible);
    controller
}

#[test]
fn scenario_a_untouched_banner_times_out() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);

    controller.tick(t0 + ms(4_999));
    assert_eq!(controller.state(), PresentationState::Visible);

    controller.tick(t0 + secs(5));
    assert_eq!(controller.state(), PresentationState::Hiding);
    assert!(controller.timer_deadline().is_none());
    assert!(controller.banner().is_some());

    controller.tick(t0 + secs(5) + ms(350));
    assert_eq!(controller.state(), PresentationState::Hidden);
    assert!(controller.banner().is_none());
    assert!(!controller.is_animating());
}

#[test]
fn scenario_b_fling_past_threshold_dismisses() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);
    let id = live_id(&controller);
    let threshold = controller.settings().threshold.value();

    controller.report_gesture(id, GestureEvent::began(), t0 + ms(1_000));
    controller.report_gesture(id, GestureEvent::changed(-(threshold + 10.0)), t0 + ms(1_050));
    controller.report_gesture(
        id,
        GestureEvent::ended(-(threshold + 10.0), -800.0),
        t0 + ms(1_100),
    );
    assert_eq!(controller.state(), PresentationState::Hiding);
    assert!(controller.timer_deadline().is_none());

    let fling = controller
        .current_animation()
        .copied()
        .expect("fling-out should be running");
    assert!(controller.settings().fling.contains(fling.duration));

    controller.tick(t0 + ms(1_100) + fling.duration);
    assert_eq!(controller.state(), PresentationState::Hidden);
    assert!(controller.banner().is_none());
}

#[test]
fn scenario_c_short_drag_snaps_back_keeping_deadline() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);
    let id = live_id(&controller);
    let deadline = controller.timer_deadline();

    controller.report_gesture(id, GestureEvent::began(), t0 + ms(1_000));
    controller.report_gesture(id, GestureEvent::changed(50.0), t0 + ms(1_050));
    controller.report_gesture(id, GestureEvent::ended(50.0, 300.0), t0 + ms(1_100));
    assert_eq!(controller.state(), PresentationState::Visible);
    assert_eq!(controller.timer_deadline(), deadline);

    controller.tick(t0 + ms(2_000));
    assert_eq!(
        controller.banner().map(BannerView::offset),
        Some(controller.resting_offset())
    );
    assert_eq!(controller.timer_deadline(), deadline);

    // The original deadline still hides the banner.
    controller.tick(t0 + secs(5));
    assert_eq!(controller.state(), PresentationState::Hiding);
}

#[test]
fn scenario_d_tap_selects_once_and_removes_immediately() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);
    let id = live_id(&controller);

    assert!(controller.tap(id, t0 + ms(900)));
    assert_eq!(controller.state(), PresentationState::Hidden);
    assert!(controller.banner().is_none());
    assert!(!controller.is_animating());
    assert!(!controller.tap(id, t0 + ms(950)));
    assert_eq!(controller.delegate().0, vec![ContentId::new("msg")]);
}

#[test]
fn only_first_display_succeeds_until_hidden() {
    let t0 = Instant::now();
    let mut controller = controller();
    assert!(controller.try_display(content("first"), t0));

    // Showing, Visible, Dragging and Hiding all reject.
    assert!(!controller.try_display(content("x"), t0 + ms(100)));
    controller.tick(t0 + ms(400));
    assert!(!controller.try_display(content("x"), t0 + ms(500)));
    let id = live_id(&controller);
    controller.report_gesture(id, GestureEvent::began(), t0 + ms(600));
    assert!(!controller.try_display(content("x"), t0 + ms(700)));
    controller.report_gesture(id, GestureEvent::ended(-300.0, -2_000.0), t0 + ms(800));
    assert_eq!(controller.state(), PresentationState::Hiding);
    assert!(!controller.try_display(content("x"), t0 + ms(810)));

    controller.tick(t0 + secs(2));
    assert_eq!(controller.state(), PresentationState::Hidden);
    assert!(controller.try_display(content("second"), t0 + secs(3)));
    assert_eq!(
        controller.banner().map(|banner| banner.content().id().as_str()),
        Some("second")
    );
}

#[test]
fn release_threshold_boundaries() {
    let epsilon = 0.5;
    for (dx_offset, expected) in [
        (-epsilon, PresentationState::Visible),
        (epsilon, PresentationState::Hiding),
    ] {
        let t0 = Instant::now();
        let mut controller = visible_at(t0);
        let id = live_id(&controller);
        let dx = -(controller.settings().threshold.value() + dx_offset);

        controller.report_gesture(id, GestureEvent::began(), t0 + ms(500));
        controller.report_gesture(id, GestureEvent::changed(dx), t0 + ms(550));
        controller.report_gesture(id, GestureEvent::ended(dx, -500.0), t0 + ms(600));
        assert_eq!(controller.state(), expected, "released at dx={dx}");
    }
}

#[test]
fn timer_during_drag_defers_by_a_full_delay() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);
    let id = live_id(&controller);
    let delay = controller.settings().dismiss_delay.as_duration();

    controller.report_gesture(id, GestureEvent::began(), t0 + secs(1));
    let fired_at = t0 + delay;
    controller.tick(fired_at);
    assert_eq!(controller.state(), PresentationState::Dragging);
    assert_eq!(controller.timer_deadline(), Some(fired_at + delay));

    // Nothing happens before the deferred deadline, even if the drag ends.
    controller.report_gesture(id, GestureEvent::ended(10.0, 0.0), fired_at + ms(100));
    controller.tick(fired_at + delay - ms(1));
    assert_eq!(controller.state(), PresentationState::Visible);

    controller.tick(fired_at + delay);
    assert_eq!(controller.state(), PresentationState::Hiding);
}

#[test]
fn timer_is_armed_exactly_while_banner_is_live() {
    let t0 = Instant::now();
    let mut controller = controller();
    assert!(controller.timer_deadline().is_none());

    controller.try_display(content("msg"), t0);
    let id = live_id(&controller);
    let mut now = t0;
    let steps = [
        GestureEvent::began(),
        GestureEvent::changed(-20.0),
        GestureEvent::changed(40.0),
        GestureEvent::cancelled(40.0),
    ];
    for event in steps {
        now += ms(50);
        controller.report_gesture(id, event, now);
        controller.tick(now);
        assert_eq!(
            controller.timer_deadline().is_some(),
            controller.state().keeps_timer_armed(),
            "state {}",
            controller.state()
        );
    }

    controller.tick(t0 + secs(5));
    assert_eq!(controller.state(), PresentationState::Hiding);
    assert!(controller.timer_deadline().is_none());
}

#[test]
fn drag_resistance_holds_through_controller() {
    let t0 = Instant::now();
    let mut controller = visible_at(t0);
    let id = live_id(&controller);
    let rest = controller.resting_offset();
    controller.report_gesture(id, GestureEvent::began(), t0 + ms(500));

    let mut previous = rest;
    for step in 1..=50_u16 {
        let dx = f32::from(step) * 40.0;
        controller.report_gesture(id, GestureEvent::changed(dx), t0 + ms(500));
        let offset = controller.banner().map_or(f32::NAN, BannerView::offset);
        assert!(offset > previous);
        assert!(offset - rest < WIDTH);
        previous = offset;
    }

    controller.report_gesture(id, GestureEvent::changed(-123.0), t0 + ms(600));
    assert_eq!(controller.banner().map(BannerView::offset), Some(rest - 123.0));
}

#[test]
fn fling_duration_is_always_in_window() {
    let window = PresentationSettings::default().fling;
    for velocity in [0.0, 1.0, 10.0, 800.0, 5_000.0, 1e9] {
        for dx in [-81.0, -200.0, -399.0, -1_000.0] {
            let duration = gesture::fling_duration(WIDTH, dx, -velocity, window);
            assert!(window.contains(duration), "v={velocity} dx={dx}");
        }
    }
}
