// SPDX-License-Identifier: MPL-2.0
//! Validated presentation parameters.
//!
//! `Config` stores raw numbers as the user wrote them; the controller only
//! ever sees the clamped values produced here.

use super::banner::BannerMetrics;
use crate::config::{self, Config};
use crate::domain::chat_head::{DampingFactor, DismissDelay, FlingWindow, GestureThreshold};
use std::time::Duration;

/// Horizontal and vertical placement of the banner inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    /// Extra distance past the container's leading edge used as the
    /// off-screen resting position.
    pub offscreen_margin: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: config::DEFAULT_INSET_TOP,
            left: config::DEFAULT_INSET_LEFT,
            right: config::DEFAULT_INSET_RIGHT,
            offscreen_margin: config::DEFAULT_OFFSCREEN_MARGIN,
        }
    }
}

/// Everything the controller needs to run a presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationSettings {
    pub dismiss_delay: DismissDelay,
    pub reveal_duration: Duration,
    pub hide_duration: Duration,
    pub insets: Insets,
    pub metrics: BannerMetrics,
    pub threshold: GestureThreshold,
    pub damping: DampingFactor,
    pub fling: FlingWindow,
    /// Initial container width, replaced on the first resize.
    pub container_width: f32,
}

impl PresentationSettings {
    /// Converts raw configuration into clamped values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let banner = &config.banner;
        let gesture = &config.gesture;
        Self {
            dismiss_delay: DismissDelay::new(banner.dismiss_delay_ms),
            reveal_duration: animation_duration(banner.reveal_duration_ms),
            hide_duration: animation_duration(banner.hide_duration_ms),
            insets: Insets {
                top: non_negative(banner.inset_top),
                left: non_negative(banner.inset_left),
                right: non_negative(banner.inset_right),
                offscreen_margin: non_negative(banner.offscreen_margin),
            },
            metrics: BannerMetrics {
                image_diameter: non_negative(banner.image_diameter),
                image_padding: non_negative(banner.image_padding),
                corner_radius: non_negative(banner.corner_radius),
            },
            threshold: GestureThreshold::new(gesture.threshold),
            damping: DampingFactor::new(gesture.damping),
            fling: FlingWindow::new(gesture.fling_min_ms, gesture.fling_max_ms),
            container_width: config::DEFAULT_CONTAINER_WIDTH,
        }
    }

    #[must_use]
    pub fn with_container_width(mut self, width: f32) -> Self {
        self.container_width = non_negative(width);
        self
    }
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn animation_duration(millis: u64) -> Duration {
    Duration::from_millis(millis.min(config::MAX_ANIMATION_DURATION_MS))
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
