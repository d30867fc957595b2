// SPDX-License-Identifier: MPL-2.0
//! Chat head presentation states.

use std::fmt;

/// Where the single chat head slot is in its presentation cycle.
///
/// The cycle always starts and ends in `Hidden`; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationState {
    /// No banner exists.
    #[default]
    Hidden,
    /// Banner is sliding in.
    Showing,
    /// Banner is at rest on screen.
    Visible,
    /// The user is dragging the banner.
    Dragging,
    /// Banner is leaving the screen (timed hide or fling-out).
    Hiding,
}

impl PresentationState {
    /// Returns true when no banner exists.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Returns true when a new banner would be rejected.
    #[must_use]
    pub fn is_busy(self) -> bool {
        !self.is_hidden()
    }

    /// Returns true if a drag may start in this state.
    #[must_use]
    pub fn accepts_drag(self) -> bool {
        matches!(self, Self::Showing | Self::Visible)
    }

    /// Returns true if a tap selects the banner in this state.
    #[must_use]
    pub fn accepts_tap(self) -> bool {
        matches!(self, Self::Showing | Self::Visible)
    }

    /// Returns true for the states in which the dismiss timer must be armed.
    #[must_use]
    pub fn keeps_timer_armed(self) -> bool {
        matches!(self, Self::Showing | Self::Visible | Self::Dragging)
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hidden => "hidden",
            Self::Showing => "showing",
            Self::Visible => "visible",
            Self::Dragging => "dragging",
            Self::Hiding => "hiding",
        };
        f.write_str(name)
    }
}
