// SPDX-License-Identifier: MPL-2.0
//! Presentation event log.
//!
//! The controller records every state transition, rejected display request,
//! deferred timer and ignored stale callback here. Events travel through a
//! bounded channel into a memory-bounded ring buffer and can be exported as
//! a JSON report for debugging.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: storage and producer side
//! - [`DiagnosticEventKind`]: what gets recorded

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{CallbackSource, DiagnosticEvent, DiagnosticEventKind, DismissCause, RejectReason};
