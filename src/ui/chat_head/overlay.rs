// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay that paints the chat head and captures its pointer input.
//!
//! The overlay spans the whole window so the banner can sit at any offset,
//! including partly or fully off the leading edge. Input outside the banner
//! passes through to whatever lies underneath.

use super::pointer::{PanRecognizer, Release};
use super::Event;
use crate::presentation::{BannerId, BannerView};
use crate::ui::design_tokens::{opacity, palette, sizing, typography};
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};
use std::time::Instant;

const ELLIPSIS: char = '…';

/// Canvas-local state: the pointer being tracked, if any.
#[derive(Debug, Default)]
pub struct OverlayState {
    recognizer: PanRecognizer,
    target: Option<BannerId>,
}

/// Canvas program for the live chat head.
pub struct ChatHeadOverlay<'a, Message> {
    banner: Option<&'a BannerView>,
    inset_top: f32,
    banner_width: f32,
    on_event: fn(Event) -> Message,
}

impl<'a, Message> ChatHeadOverlay<'a, Message> {
    #[must_use]
    pub fn new(
        banner: Option<&'a BannerView>,
        inset_top: f32,
        banner_width: f32,
        on_event: fn(Event) -> Message,
    ) -> Self {
        Self {
            banner,
            inset_top,
            banner_width,
            on_event,
        }
    }

    fn banner_rect(&self, banner: &BannerView) -> Rectangle {
        Rectangle::new(
            Point::new(banner.offset(), self.inset_top),
            Size::new(self.banner_width, banner.preferred_height()),
        )
    }

    fn publish(&self, event: Event) -> Option<Action<Message>> {
        Some(Action::publish((self.on_event)(event)).and_capture())
    }
}

impl<Message> canvas::Program<Message> for ChatHeadOverlay<'_, Message> {
    type State = OverlayState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let Some(banner) = self.banner else {
            state.recognizer.cancel();
            state.target = None;
            return None;
        };
        let now = Instant::now();

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if !self.banner_rect(banner).contains(position) {
                    return None;
                }
                state.recognizer.press(position, now);
                state.target = Some(banner.id());
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let target = state.target?;
                let Some(position) = cursor.position_in(bounds) else {
                    let cancelled = state.recognizer.cancel()?;
                    return self.publish(Event::Gesture(target, cancelled));
                };
                let gesture = state.recognizer.moved(position, now)?;
                self.publish(Event::Gesture(target, gesture))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let target = state.target.take()?;
                let Some(position) = cursor.position_in(bounds) else {
                    let cancelled = state.recognizer.cancel()?;
                    return self.publish(Event::Gesture(target, cancelled));
                };
                match state.recognizer.release(position, now)? {
                    Release::Tap => self.publish(Event::Tap(target)),
                    Release::Gesture(ended) => self.publish(Event::Gesture(target, ended)),
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                let target = state.target.take()?;
                let cancelled = state.recognizer.cancel()?;
                self.publish(Event::Gesture(target, cancelled))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if let Some(banner) = self.banner.filter(|banner| banner.opacity() > 0.0) {
            self.draw_banner(&mut frame, banner);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.recognizer.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        let over_banner = self.banner.zip(cursor.position_in(bounds)).is_some_and(
            |(banner, position)| self.banner_rect(banner).contains(position),
        );
        if over_banner {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<Message> ChatHeadOverlay<'_, Message> {
    fn draw_banner(&self, frame: &mut Frame, banner: &BannerView) {
        let alpha = banner.opacity();
        let rect = self.banner_rect(banner);
        let metrics = banner.metrics();
        let content = banner.content();

        let card = Path::rounded_rectangle(
            rect.position(),
            rect.size(),
            metrics.corner_radius.into(),
        );
        frame.fill(&card, faded(palette::BANNER_BACKGROUND, alpha * opacity::SURFACE));

        let radius = metrics.image_diameter / 2.0;
        let center = Point::new(
            rect.x + metrics.image_padding + radius,
            rect.y + metrics.image_padding + radius,
        );
        frame.fill(
            &Path::circle(center, radius),
            faded(accent_for(content.sender_id().as_str()), alpha),
        );

        let initials = content.sender_initials();
        let initials_width = estimated_width(&initials, typography::INITIALS);
        frame.fill_text(Text {
            content: initials,
            position: Point::new(
                center.x - initials_width / 2.0,
                center.y - typography::INITIALS / 2.0,
            ),
            color: faded(palette::WHITE, alpha),
            size: typography::INITIALS.into(),
            ..Text::default()
        });

        let text_x = rect.x + metrics.image_diameter + 2.0 * metrics.image_padding;
        let text_width = (rect.width - metrics.image_diameter - 3.0 * metrics.image_padding).max(0.0);
        let title_y = rect.y + metrics.image_padding;

        frame.fill_text(Text {
            content: truncate_tail(&content.title(), text_width, typography::BANNER_TITLE),
            position: Point::new(text_x, title_y),
            color: faded(palette::WHITE, alpha),
            size: typography::BANNER_TITLE.into(),
            ..Text::default()
        });

        let subtitle_alpha = if content.is_ephemeral() {
            opacity::EPHEMERAL
        } else {
            opacity::SUBTITLE
        };
        frame.fill_text(Text {
            content: truncate_tail(&content.subtitle(), text_width, typography::BANNER_SUBTITLE),
            position: Point::new(text_x, title_y + typography::BANNER_TITLE + sizing::LINE_GAP),
            color: faded(palette::GRAY_100, alpha * subtitle_alpha),
            size: typography::BANNER_SUBTITLE.into(),
            ..Text::default()
        });
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Stable avatar color for a sender.
fn accent_for(sender: &str) -> Color {
    let hash = sender
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(usize::from(byte)));
    palette::ACCENTS[hash % palette::ACCENTS.len()]
}

#[allow(clippy::cast_precision_loss)] // label lengths are tiny
fn estimated_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * typography::GLYPH_WIDTH_RATIO
}

/// Cuts `text` so it fits in `max_width`, ending with an ellipsis when cut.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_tail(text: &str, max_width: f32, font_size: f32) -> String {
    let glyph = font_size * typography::GLYPH_WIDTH_RATIO;
    if glyph <= 0.0 {
        return text.to_string();
    }
    let capacity = (max_width / glyph).floor().max(0.0) as usize;
    if text.chars().count() <= capacity {
        return text.to_string();
    }
    if capacity == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(capacity - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push(ELLIPSIS);
    cut
}
