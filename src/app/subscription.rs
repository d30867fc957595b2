// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo host.

use super::Message;
use crate::domain::chat_head::PresentationState;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while a chat head is on screen.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards window resizes so the controller knows the container width.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Drives animations and the dismiss timer. Idle while no banner exists.
pub fn create_tick_subscription(state: PresentationState) -> Subscription<Message> {
    if state.is_busy() {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
