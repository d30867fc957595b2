// SPDX-License-Identifier: MPL-2.0
//! Presentation event types recorded by the diagnostics log.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Why a display request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A chat head is already on screen.
    Busy,
    /// The notification no longer resolves to displayable content.
    Unresolved,
    /// The delegate declined (e.g. conversation already open).
    Suppressed,
}

/// Which asynchronous source delivered a callback that no longer applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackSource {
    Timer,
    Animation,
    Gesture,
    Tap,
}

/// How a chat head left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissCause {
    /// The dismiss timer ran out.
    Timeout,
    /// The user flung it away.
    Fling,
}

/// A recorded event with its timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and data of a presentation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The state machine moved between states.
    Transition { from: String, to: String },
    /// A display request was rejected.
    DisplayRejected { reason: RejectReason },
    /// The dismiss timer fired mid-drag and was re-armed.
    TimerDeferred,
    /// A timer, animation, gesture or tap callback arrived for state that
    /// had already moved on.
    StaleCallback { source: CallbackSource },
    /// A hide or fling-out animation started.
    Dismissed { cause: DismissCause, duration_ms: u64 },
    /// The banner was tapped and the selection handed to the delegate.
    Selected { content_id: String },
}
