// SPDX-License-Identifier: MPL-2.0
//! iced front end for the chat head.
//!
//! [`ChatHeadOverlay`] paints whatever banner the controller reports and
//! turns pointer input on it into [`Event`]s for the host to forward.

pub mod overlay;
pub mod pointer;

pub use overlay::{ChatHeadOverlay, OverlayState};
pub use pointer::{PanRecognizer, Release};

use crate::presentation::{BannerId, GestureEvent};

/// Input captured by the overlay, addressed to the banner it hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Gesture(BannerId, GestureEvent),
    Tap(BannerId),
}
