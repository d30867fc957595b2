// SPDX-License-Identifier: MPL-2.0
//! Presentation controller: the chat head state machine.
//!
//! The controller owns the single banner slot, the dismiss timer, the drag
//! interpreter and the animation driver. Every input is delivered on the UI
//! thread together with the event-loop time, so the controller itself never
//! reads the clock.
//!
//! Exactly one party drives the banner offset at any moment:
//!
//! | State      | Offset authority                     |
//! |------------|--------------------------------------|
//! | `Showing`  | reveal animation                     |
//! | `Visible`  | none, or the snap-back animation     |
//! | `Dragging` | drag interpreter                     |
//! | `Hiding`   | hide or fling-out animation          |
//!
//! Timer fires, animation completions, gestures and taps that arrive after
//! the state has moved on are ignored.

use super::animation::{Animation, AnimationDriver, AnimationId, AnimationKind, BannerFrame, Easing};
use super::banner::{BannerId, BannerView};
use super::gesture::{self, DragResolution, GestureEvent, GesturePhase};
use super::resolver::{ContentResolver, RawNotification};
use super::settings::PresentationSettings;
use super::timer::DismissTimer;
use crate::diagnostics::{
    CallbackSource, DiagnosticEventKind, DiagnosticsHandle, DismissCause, RejectReason,
};
use crate::domain::chat_head::{ContentDescriptor, ContentId, PresentationState};
use std::sync::Arc;
use std::time::Instant;

/// Host-side collaborator consulted before display and told about selections.
pub trait Delegate {
    /// Returns false to suppress a banner, e.g. when its conversation is
    /// already on screen.
    fn should_display(&mut self, _content: &ContentDescriptor) -> bool {
        true
    }

    /// Called once per cycle, after the tapped banner has been removed.
    fn did_select(&mut self, content_id: &ContentId);
}

/// Drives one chat head at a time through its presentation cycle.
#[derive(Debug)]
pub struct Controller<D: Delegate> {
    settings: PresentationSettings,
    state: PresentationState,
    banner: Option<BannerView>,
    timer: DismissTimer,
    animations: AnimationDriver,
    next_banner_id: u64,
    delegate: D,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<D: Delegate> Controller<D> {
    #[must_use]
    pub fn new(settings: PresentationSettings, delegate: D) -> Self {
        Self {
            timer: DismissTimer::new(settings.dismiss_delay),
            settings,
            state: PresentationState::Hidden,
            banner: None,
            animations: AnimationDriver::new(),
            next_banner_id: 0,
            delegate,
            diagnostics: None,
        }
    }

    /// Routes transitions, rejections and stale callbacks to `handle`.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // =========================================================================
    // Inbound
    // =========================================================================

    /// Presents `content` if the slot is free and the delegate agrees.
    ///
    /// Returns whether the banner was accepted. Rejection leaves every piece
    /// of state untouched.
    pub fn try_display(&mut self, content: impl Into<Arc<ContentDescriptor>>, now: Instant) -> bool {
        if self.state.is_busy() {
            self.reject(RejectReason::Busy, now);
            return false;
        }
        let content = content.into();
        if !self.delegate.should_display(&content) {
            self.reject(RejectReason::Suppressed, now);
            return false;
        }
        self.present(content, now);
        true
    }

    /// Resolves a platform notification and presents the result.
    ///
    /// The busy check runs first so that nothing is resolved while a banner
    /// is on screen.
    pub fn try_display_notification<R>(
        &mut self,
        notification: &RawNotification,
        resolver: &R,
        now: Instant,
    ) -> bool
    where
        R: ContentResolver + ?Sized,
    {
        if self.state.is_busy() {
            self.reject(RejectReason::Busy, now);
            return false;
        }
        match resolver.resolve(notification) {
            Some(content) => self.try_display(content, now),
            None => {
                self.reject(RejectReason::Unresolved, now);
                false
            }
        }
    }

    /// Handles one pan gesture callback addressed to `banner_id`.
    pub fn report_gesture(&mut self, banner_id: BannerId, event: GestureEvent, now: Instant) {
        if self.live_banner_id() != Some(banner_id) {
            if event.phase != GesturePhase::Changed {
                self.log_stale(CallbackSource::Gesture, now);
            }
            return;
        }

        match event.phase {
            GesturePhase::Began => {
                if !self.state.accepts_drag() {
                    self.log_stale(CallbackSource::Gesture, now);
                    return;
                }
                // The drag takes the offset away from a reveal or snap-back.
                self.animations.cancel();
                let offset = self.drag_position(0.0);
                self.set_frame(BannerFrame::new(offset, 1.0));
                self.transition(PresentationState::Dragging, now);
            }
            GesturePhase::Changed => {
                if self.state == PresentationState::Dragging {
                    let offset = self.drag_position(event.sample.translation.x);
                    if let Some(banner) = self.banner.as_mut() {
                        banner.set_offset(offset);
                    }
                }
            }
            GesturePhase::Ended => {
                if self.state != PresentationState::Dragging {
                    self.log_stale(CallbackSource::Gesture, now);
                    return;
                }
                let dx = event.sample.translation.x;
                match gesture::resolve_release(dx, self.settings.threshold) {
                    DragResolution::Dismiss => self.fling_out(dx, event.sample.velocity.x, now),
                    DragResolution::SnapBack => self.snap_back(now),
                }
            }
            GesturePhase::Cancelled => {
                if self.state != PresentationState::Dragging {
                    self.log_stale(CallbackSource::Gesture, now);
                    return;
                }
                self.snap_back(now);
            }
        }
    }

    /// Handles the dismiss timer firing.
    ///
    /// A fire before the current deadline belongs to an earlier arming and
    /// is ignored, as is any fire once the banner is hiding or gone.
    pub fn report_timer_fired(&mut self, now: Instant) {
        if !self.timer.is_due(now) {
            self.log_stale(CallbackSource::Timer, now);
            return;
        }
        match self.state {
            PresentationState::Dragging => {
                self.timer.arm(now);
                self.log(DiagnosticEventKind::TimerDeferred, now);
            }
            PresentationState::Showing | PresentationState::Visible => self.hide(now),
            PresentationState::Hidden | PresentationState::Hiding => {
                self.log_stale(CallbackSource::Timer, now);
            }
        }
    }

    /// Delivers the completion of animation `id`.
    ///
    /// Completions for an animation that has been overridden are ignored.
    pub fn animation_finished(&mut self, id: AnimationId, now: Instant) {
        if self.animations.current_id() != Some(id) {
            self.log_stale(CallbackSource::Animation, now);
            return;
        }
        if let Some(animation) = self.animations.current().copied() {
            self.animations.cancel();
            self.set_frame(animation.to);
            self.complete(animation.kind, now);
        }
    }

    /// Handles a tap on banner `banner_id`.
    ///
    /// The banner is removed at once, without a hide animation, and the
    /// delegate is told afterwards. Returns whether the tap selected.
    pub fn tap(&mut self, banner_id: BannerId, now: Instant) -> bool {
        if self.live_banner_id() != Some(banner_id) || !self.state.accepts_tap() {
            self.log_stale(CallbackSource::Tap, now);
            return false;
        }
        let Some(content_id) = self.banner.as_mut().and_then(BannerView::select) else {
            return false;
        };
        self.remove_banner(now);
        self.log(
            DiagnosticEventKind::Selected {
                content_id: content_id.to_string(),
            },
            now,
        );
        self.delegate.did_select(&content_id);
        true
    }

    /// Advances the controller to `now`: samples the running animation,
    /// delivers its completion, then fires a due timer.
    pub fn tick(&mut self, now: Instant) {
        if let Some(finished) = self.animations.poll_finished(now) {
            self.set_frame(finished.to);
            self.complete(finished.kind, now);
        } else if let Some(frame) = self.animations.sample(now) {
            self.set_frame(frame);
        }
        if self.timer.is_due(now) {
            self.report_timer_fired(now);
        }
    }

    /// Updates the width of the surface the banner lives in.
    pub fn set_container_width(&mut self, width: f32) {
        self.settings = self.settings.with_container_width(width);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn banner(&self) -> Option<&BannerView> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn timer_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animations.is_running()
    }

    /// Id of the animation currently driving the banner.
    #[must_use]
    pub fn animation_id(&self) -> Option<AnimationId> {
        self.animations.current_id()
    }

    #[must_use]
    pub fn current_animation(&self) -> Option<&Animation> {
        self.animations.current()
    }

    #[must_use]
    pub fn settings(&self) -> &PresentationSettings {
        &self.settings
    }

    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[must_use]
    pub fn banner_width(&self) -> f32 {
        let insets = self.settings.insets;
        (self.settings.container_width - insets.left - insets.right).max(0.0)
    }

    /// Offset of a banner at rest.
    #[must_use]
    pub fn resting_offset(&self) -> f32 {
        self.settings.insets.left
    }

    /// Offset at which the banner is fully outside the container.
    #[must_use]
    pub fn offscreen_offset(&self) -> f32 {
        -(self.banner_width() + self.settings.insets.offscreen_margin)
    }

    fn fling_target(&self) -> f32 {
        -self.settings.container_width
    }

    fn drag_position(&self, dx: f32) -> f32 {
        self.resting_offset()
            + gesture::resistance_offset(dx, self.settings.container_width, self.settings.damping)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn present(&mut self, content: Arc<ContentDescriptor>, now: Instant) {
        self.next_banner_id += 1;
        let offscreen = self.offscreen_offset();
        self.banner = Some(BannerView::new(
            BannerId::new(self.next_banner_id),
            content,
            self.settings.metrics,
            offscreen,
        ));
        self.timer.arm(now);
        self.animations.start(Animation {
            kind: AnimationKind::Reveal,
            from: BannerFrame::new(offscreen, 0.0),
            to: BannerFrame::new(self.resting_offset(), 1.0),
            duration: self.settings.reveal_duration,
            easing: Easing::EaseOutExpo,
            started_at: now,
        });
        self.transition(PresentationState::Showing, now);
    }

    fn hide(&mut self, now: Instant) {
        let from = self.sample_frame(now);
        let duration = self.settings.hide_duration;
        self.animations.start(Animation {
            kind: AnimationKind::Hide,
            from,
            to: BannerFrame::new(self.offscreen_offset(), 0.0),
            duration,
            easing: Easing::EaseInExpo,
            started_at: now,
        });
        self.transition(PresentationState::Hiding, now);
        if let Some(handle) = &self.diagnostics {
            handle.log_dismissed(DismissCause::Timeout, duration, now);
        }
    }

    fn fling_out(&mut self, dx: f32, velocity_x: f32, now: Instant) {
        let from = self.sample_frame(now);
        let duration = gesture::fling_duration(
            self.settings.container_width,
            dx,
            velocity_x,
            self.settings.fling,
        );
        self.animations.start(Animation {
            kind: AnimationKind::FlingOut,
            from,
            to: BannerFrame::new(self.fling_target(), from.opacity),
            duration,
            easing: Easing::EaseInQuad,
            started_at: now,
        });
        self.transition(PresentationState::Hiding, now);
        if let Some(handle) = &self.diagnostics {
            handle.log_dismissed(DismissCause::Fling, duration, now);
        }
    }

    /// Returns the banner to rest. The timer keeps its original deadline.
    fn snap_back(&mut self, now: Instant) {
        let from = self.sample_frame(now);
        self.animations.start(Animation {
            kind: AnimationKind::SnapBack,
            from,
            to: BannerFrame::new(self.resting_offset(), 1.0),
            duration: self.settings.reveal_duration,
            easing: Easing::EaseOutExpo,
            started_at: now,
        });
        self.transition(PresentationState::Visible, now);
    }

    fn complete(&mut self, kind: AnimationKind, now: Instant) {
        if kind.removes_banner() {
            if self.state == PresentationState::Hiding {
                self.remove_banner(now);
            }
        } else if kind == AnimationKind::Reveal && self.state == PresentationState::Showing {
            self.transition(PresentationState::Visible, now);
        }
    }

    fn remove_banner(&mut self, now: Instant) {
        self.animations.cancel();
        if let Some(mut banner) = self.banner.take() {
            banner.detach();
        }
        self.transition(PresentationState::Hidden, now);
    }

    fn transition(&mut self, to: PresentationState, now: Instant) {
        if !to.keeps_timer_armed() {
            self.timer.disarm();
        }
        let from = std::mem::replace(&mut self.state, to);
        if from != to {
            if let Some(handle) = &self.diagnostics {
                handle.log_transition(from, to, now);
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn live_banner_id(&self) -> Option<BannerId> {
        self.banner.as_ref().map(BannerView::id)
    }

    /// Writes the in-flight animation's frame at `now` into the banner and
    /// returns the banner's frame.
    fn sample_frame(&mut self, now: Instant) -> BannerFrame {
        if let Some(frame) = self.animations.sample(now) {
            self.set_frame(frame);
        }
        self.banner
            .as_ref()
            .map_or(BannerFrame::new(self.offscreen_offset(), 0.0), BannerView::frame)
    }

    fn set_frame(&mut self, frame: BannerFrame) {
        if let Some(banner) = self.banner.as_mut() {
            banner.set_frame(frame);
        }
    }

    fn reject(&self, reason: RejectReason, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log_rejected(reason, now);
        }
    }

    fn log_stale(&self, source: CallbackSource, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log_stale(source, now);
        }
    }

    fn log(&self, kind: DiagnosticEventKind, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log_at(kind, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::presentation::resolver::Directory;
    use crate::domain::chat_head::{ConversationId, ConversationKind, MessageKind};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Recorder {
        selected: Vec<ContentId>,
        blocked: Option<ConversationId>,
    }

    impl Delegate for Recorder {
        fn should_display(&mut self, content: &ContentDescriptor) -> bool {
            self.blocked.as_ref() != Some(content.conversation_id())
        }

        fn did_select(&mut self, content_id: &ContentId) {
            self.selected.push(content_id.clone());
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn content(id: &str) -> ContentDescriptor {
        ContentDescriptor::new(id, "conv-1", "Design", "user-1", "Ada").with_summary("hello")
    }

    fn controller() -> Controller<Recorder> {
        let settings = PresentationSettings::default().with_container_width(400.0);
        Controller::new(settings, Recorder::default())
    }

    fn banner_id(controller: &Controller<Recorder>) -> BannerId {
        controller.banner().expect("banner should be live").id()
    }

    /// Displays a banner and lets the reveal finish.
    fn visible(t0: Instant) -> Controller<Recorder> {
        let mut controller = controller();
        assert!(controller.try_display(content("m-1"), t0));
        controller.tick(t0 + ms(400));
        assert_eq!(controller.state(), PresentationState::Visible);
        controller
    }

    #[test]
    fn display_arms_timer_and_starts_reveal_offscreen() {
        let t0 = Instant::now();
        let mut controller = controller();
        assert!(controller.try_display(content("m-1"), t0));

        assert_eq!(controller.state(), PresentationState::Showing);
        assert_eq!(controller.timer_deadline(), Some(t0 + Duration::from_secs(5)));
        assert!(controller.is_animating());
        let banner = controller.banner().expect("banner should be live");
        assert_eq!(banner.offset(), controller.offscreen_offset());
        assert_eq!(banner.opacity(), 0.0);
        assert!(controller.offscreen_offset() + controller.banner_width() < 0.0);
    }

    #[test]
    fn default_delegate_admits_every_banner() {
        struct Silent;
        impl Delegate for Silent {
            fn did_select(&mut self, _content_id: &ContentId) {}
        }

        let settings = PresentationSettings::default().with_container_width(400.0);
        let mut controller = Controller::new(settings, Silent);
        assert!(controller.try_display(content("m-1"), Instant::now()));
        assert_eq!(controller.state(), PresentationState::Showing);
    }

    #[test]
    fn second_display_is_rejected_while_busy() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        assert!(!controller.try_display(content("m-2"), t0 + ms(500)));
        assert_eq!(banner_id(&controller), id);
        assert_eq!(controller.banner().map(|b| b.content().id().as_str()), Some("m-1"));
    }

    #[test]
    fn delegate_can_suppress_display() {
        let t0 = Instant::now();
        let mut controller = controller();
        controller.delegate_mut().blocked = Some(ConversationId::new("conv-1"));
        assert!(!controller.try_display(content("m-1"), t0));
        assert_eq!(controller.state(), PresentationState::Hidden);
        assert!(controller.timer_deadline().is_none());
    }

    #[test]
    fn unresolved_notification_is_rejected() {
        let t0 = Instant::now();
        let mut directory = Directory::new();
        directory.add_account("acc", None);
        directory.add_user("u", "Ada");
        directory.add_conversation("acc", "c", "Ada", ConversationKind::OneToOne);
        directory.add_message("c", "m", "u", MessageKind::Text, "hi");

        let mut controller = controller();
        let missing = RawNotification::new("acc", "c", "gone");
        assert!(!controller.try_display_notification(&missing, &directory, t0));
        assert_eq!(controller.state(), PresentationState::Hidden);

        let present = RawNotification::new("acc", "c", "m");
        assert!(controller.try_display_notification(&present, &directory, t0));
        assert_eq!(controller.state(), PresentationState::Showing);
    }

    #[test]
    fn reveal_completion_reaches_resting_frame() {
        let t0 = Instant::now();
        let controller = visible(t0);
        let banner = controller.banner().expect("banner should be live");
        assert_eq!(banner.offset(), controller.resting_offset());
        assert_eq!(banner.opacity(), 1.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn timeout_hides_then_removes() {
        let t0 = Instant::now();
        let mut controller = visible(t0);

        controller.tick(t0 + Duration::from_secs(5));
        assert_eq!(controller.state(), PresentationState::Hiding);
        assert!(controller.timer_deadline().is_none());

        controller.tick(t0 + Duration::from_secs(6));
        assert_eq!(controller.state(), PresentationState::Hidden);
        assert!(controller.banner().is_none());
    }

    #[test]
    fn timer_during_reveal_overrides_reveal() {
        let t0 = Instant::now();
        let mut controller = controller();
        controller.try_display(content("m-1"), t0);
        let reveal = controller.animation_id().expect("reveal should run");

        // Fire without ticking so the reveal is still in flight.
        controller.report_timer_fired(t0 + Duration::from_secs(5));
        assert_eq!(controller.state(), PresentationState::Hiding);
        assert_ne!(controller.animation_id(), Some(reveal));

        controller.animation_finished(reveal, t0 + Duration::from_secs(5));
        assert_eq!(controller.state(), PresentationState::Hiding);
    }

    #[test]
    fn early_timer_fire_is_ignored() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        controller.report_timer_fired(t0 + Duration::from_secs(1));
        assert_eq!(controller.state(), PresentationState::Visible);
    }

    #[test]
    fn timer_during_drag_is_deferred() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        controller.report_gesture(id, GestureEvent::began(), t0 + ms(1_000));
        controller.report_gesture(id, GestureEvent::changed(-20.0), t0 + ms(1_100));

        let fired_at = t0 + Duration::from_secs(5);
        controller.report_timer_fired(fired_at);
        assert_eq!(controller.state(), PresentationState::Dragging);
        assert_eq!(
            controller.timer_deadline(),
            Some(fired_at + Duration::from_secs(5))
        );
    }

    #[test]
    fn fire_from_arming_before_drag_deferral_is_ignored() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        controller.report_gesture(id, GestureEvent::began(), t0 + ms(1_000));

        let fired_at = t0 + Duration::from_secs(5);
        controller.report_timer_fired(fired_at);
        controller.report_gesture(id, GestureEvent::ended(10.0, 0.0), fired_at + ms(100));
        assert_eq!(controller.state(), PresentationState::Visible);

        // A duplicate callback scheduled for the first deadline arrives late.
        controller.report_timer_fired(fired_at + ms(200));
        assert_eq!(controller.state(), PresentationState::Visible);
        assert_eq!(
            controller.timer_deadline(),
            Some(fired_at + Duration::from_secs(5))
        );
    }

    #[test]
    fn drag_offsets_follow_resistance_curve() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        let rest = controller.resting_offset();

        controller.report_gesture(id, GestureEvent::began(), t0 + ms(500));
        controller.report_gesture(id, GestureEvent::changed(-60.0), t0 + ms(510));
        assert_eq!(controller.banner().map(BannerView::offset), Some(rest - 60.0));

        controller.report_gesture(id, GestureEvent::changed(80.0), t0 + ms(520));
        let offset = controller.banner().map_or(0.0, BannerView::offset);
        assert!(offset > rest && offset < rest + 80.0);
    }

    #[test]
    fn drag_can_start_during_reveal() {
        let t0 = Instant::now();
        let mut controller = controller();
        controller.try_display(content("m-1"), t0);
        let id = banner_id(&controller);

        controller.report_gesture(id, GestureEvent::began(), t0 + ms(100));
        assert_eq!(controller.state(), PresentationState::Dragging);
        assert!(!controller.is_animating());
        assert_eq!(controller.banner().map(BannerView::opacity), Some(1.0));
    }

    #[test]
    fn cancelled_drag_snaps_back() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        let deadline = controller.timer_deadline();

        controller.report_gesture(id, GestureEvent::began(), t0 + ms(500));
        controller.report_gesture(id, GestureEvent::changed(-200.0), t0 + ms(600));
        controller.report_gesture(id, GestureEvent::cancelled(-200.0), t0 + ms(700));
        assert_eq!(controller.state(), PresentationState::Visible);
        assert_eq!(controller.timer_deadline(), deadline);

        controller.tick(t0 + ms(1_200));
        assert_eq!(
            controller.banner().map(BannerView::offset),
            Some(controller.resting_offset())
        );
    }

    #[test]
    fn fling_out_uses_container_width_target() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);

        controller.report_gesture(id, GestureEvent::began(), t0 + ms(500));
        controller.report_gesture(id, GestureEvent::ended(-150.0, -1_000.0), t0 + ms(600));
        assert_eq!(controller.state(), PresentationState::Hiding);
        let animation = controller.current_animation().expect("fling should run");
        assert_eq!(animation.kind, AnimationKind::FlingOut);
        assert_eq!(animation.to.offset, -400.0);
        assert!(controller.settings().fling.contains(animation.duration));
    }

    #[test]
    fn gestures_for_other_banner_are_ignored() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let stale = BannerId::new(banner_id(&controller).value() + 7);
        controller.report_gesture(stale, GestureEvent::began(), t0 + ms(500));
        assert_eq!(controller.state(), PresentationState::Visible);
    }

    #[test]
    fn tap_removes_immediately_and_notifies_once() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);

        assert!(controller.tap(id, t0 + ms(800)));
        assert_eq!(controller.state(), PresentationState::Hidden);
        assert!(controller.banner().is_none());
        assert!(controller.timer_deadline().is_none());
        assert!(!controller.tap(id, t0 + ms(900)));
        assert_eq!(controller.delegate().selected, vec![ContentId::new("m-1")]);

        // Stale timer after the tap is a no-op.
        controller.report_timer_fired(t0 + Duration::from_secs(5));
        assert_eq!(controller.state(), PresentationState::Hidden);
    }

    #[test]
    fn tap_while_hiding_is_ignored() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let id = banner_id(&controller);
        controller.tick(t0 + Duration::from_secs(5));
        assert!(!controller.tap(id, t0 + Duration::from_secs(5) + ms(10)));
        assert!(controller.delegate().selected.is_empty());
    }

    #[test]
    fn cycle_can_repeat_with_fresh_banner_id() {
        let t0 = Instant::now();
        let mut controller = visible(t0);
        let first = banner_id(&controller);
        controller.tap(first, t0 + ms(500));

        assert!(controller.try_display(content("m-2"), t0 + ms(600)));
        assert_ne!(banner_id(&controller), first);
    }

    #[test]
    fn diagnostics_record_cycle() {
        let t0 = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut controller = controller().with_diagnostics(collector.handle());
        controller.try_display(content("m-1"), t0);
        controller.try_display(content("m-2"), t0 + ms(10));
        controller.tick(t0 + ms(400));
        let id = banner_id(&controller);
        controller.tap(id, t0 + ms(500));

        collector.process_pending();
        let kinds: Vec<_> = collector.kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Transition {
                    from: "hidden".into(),
                    to: "showing".into()
                },
                DiagnosticEventKind::DisplayRejected {
                    reason: RejectReason::Busy
                },
                DiagnosticEventKind::Transition {
                    from: "showing".into(),
                    to: "visible".into()
                },
                DiagnosticEventKind::Transition {
                    from: "visible".into(),
                    to: "hidden".into()
                },
                DiagnosticEventKind::Selected {
                    content_id: "m-1".into()
                },
            ]
        );
    }
}
