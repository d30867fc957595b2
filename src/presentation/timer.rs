// SPDX-License-Identifier: MPL-2.0
//! Single-shot, re-armable dismiss timer.
//!
//! The timer does not schedule anything itself: it records a deadline that
//! the host's scheduler (or the frame tick) compares against the clock. A
//! fire reported before the current deadline belongs to an earlier arming.

use crate::domain::chat_head::DismissDelay;
use std::time::Instant;

/// Countdown that hides the chat head when it runs out.
#[derive(Debug, Clone)]
pub struct DismissTimer {
    delay: DismissDelay,
    deadline: Option<Instant>,
}

impl DismissTimer {
    #[must_use]
    pub fn new(delay: DismissDelay) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the timer to fire one full delay after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay.as_duration());
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once the armed deadline has been reached.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timer() -> DismissTimer {
        DismissTimer::new(DismissDelay::new(2_000))
    }

    #[test]
    fn new_timer_is_disarmed() {
        let timer = timer();
        assert!(timer.deadline().is_none());
        assert!(!timer.is_due(Instant::now()));
    }

    #[test]
    fn arm_sets_deadline_one_delay_later() {
        let mut timer = timer();
        let now = Instant::now();
        timer.arm(now);
        assert_eq!(timer.deadline(), Some(now + Duration::from_secs(2)));
        assert!(!timer.is_due(now + Duration::from_millis(1_999)));
        assert!(timer.is_due(now + Duration::from_secs(2)));
    }

    #[test]
    fn rearm_pushes_deadline_back() {
        let mut timer = timer();
        let now = Instant::now();
        timer.arm(now);
        timer.arm(now + Duration::from_secs(1));
        assert!(!timer.is_due(now + Duration::from_secs(2)));
        assert_eq!(timer.deadline(), Some(now + Duration::from_secs(3)));
    }

    #[test]
    fn disarmed_timer_is_never_due() {
        let mut timer = timer();
        let now = Instant::now();
        timer.arm(now);
        timer.disarm();
        assert!(timer.deadline().is_none());
        assert!(!timer.is_due(now + Duration::from_secs(60)));
    }
}
