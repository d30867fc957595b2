// SPDX-License-Identifier: MPL-2.0
//! The banner view: one rendered chat head.
//!
//! A `BannerView` carries no timing or gesture logic. It holds the content it
//! renders, the offset and opacity written by whoever currently animates it,
//! and reports a single selection. The controller attaches and removes it.

use super::animation::BannerFrame;
use crate::domain::chat_head::{ContentDescriptor, ContentId};
use std::sync::Arc;

/// Identifies one banner instance across its lifetime.
///
/// Input routed to a banner carries this id so that events addressed to a
/// view that has since been removed can be told apart from live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

impl BannerId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Internal layout measurements of a banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerMetrics {
    /// Avatar diameter.
    pub image_diameter: f32,
    /// Space around the avatar.
    pub image_padding: f32,
    pub corner_radius: f32,
}

impl BannerMetrics {
    /// Height the banner asks its container to reserve.
    #[must_use]
    pub fn preferred_height(&self) -> f32 {
        self.image_diameter + 2.0 * self.image_padding
    }
}

/// A single chat head.
#[derive(Debug, Clone)]
pub struct BannerView {
    id: BannerId,
    content: Arc<ContentDescriptor>,
    frame: BannerFrame,
    metrics: BannerMetrics,
    attached: bool,
    selected: bool,
}

impl BannerView {
    /// Creates an attached, transparent banner at `offset`.
    #[must_use]
    pub fn new(
        id: BannerId,
        content: Arc<ContentDescriptor>,
        metrics: BannerMetrics,
        offset: f32,
    ) -> Self {
        Self {
            id,
            content,
            frame: BannerFrame::new(offset, 0.0),
            metrics,
            attached: true,
            selected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ContentDescriptor {
        &self.content
    }

    #[must_use]
    pub fn metrics(&self) -> BannerMetrics {
        self.metrics
    }

    #[must_use]
    pub fn preferred_height(&self) -> f32 {
        self.metrics.preferred_height()
    }

    #[must_use]
    pub fn frame(&self) -> BannerFrame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: BannerFrame) {
        self.frame = frame;
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.frame.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.frame.offset = offset;
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.frame.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.frame.opacity = opacity.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Marks the view as removed from its container. Irreversible.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Reports a tap. Yields the content id the first time only, and never
    /// once the view has been detached.
    pub fn select(&mut self) -> Option<ContentId> {
        if !self.attached || self.selected {
            return None;
        }
        self.selected = true;
        Some(self.content.id().clone())
    }
}
