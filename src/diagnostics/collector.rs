// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for presentation events.
//!
//! Producers log through a cloneable `DiagnosticsHandle`; the collector
//! drains the channel into a bounded buffer and exports it as JSON.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CallbackSource, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DismissCause, RejectReason,
};

/// Channel depth between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Handle for sending events to the collector.
///
/// Sending never blocks; events are dropped when the channel is full or
/// the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event stamped with `at`.
    pub fn log_at(&self, kind: DiagnosticEventKind, at: Instant) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::with_timestamp(kind, at));
    }

    pub fn log_transition(&self, from: impl ToString, to: impl ToString, at: Instant) {
        self.log_at(
            DiagnosticEventKind::Transition {
                from: from.to_string(),
                to: to.to_string(),
            },
            at,
        );
    }

    pub fn log_rejected(&self, reason: RejectReason, at: Instant) {
        self.log_at(DiagnosticEventKind::DisplayRejected { reason }, at);
    }

    pub fn log_stale(&self, source: CallbackSource, at: Instant) {
        self.log_at(DiagnosticEventKind::StaleCallback { source }, at);
    }

    #[allow(clippy::cast_possible_truncation)] // animation durations are well under u64::MAX ms
    pub fn log_dismissed(&self, cause: DismissCause, duration: std::time::Duration, at: Instant) {
        self.log_at(
            DiagnosticEventKind::Dismissed {
                cause,
                duration_ms: duration.as_millis() as u64,
            },
            at,
        );
    }
}

/// A single event in an exported report.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// Exported presentation log.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub version: String,
    pub collection_started_at: String,
    pub generated_at: String,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

/// Central store of presentation events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Call on each UI tick, or before reading.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Stored event kinds, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Renders the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // session lengths fit comfortably in u64 ms
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: self.started_at_utc.to_rfc3339(),
            generated_at: Utc::now().to_rfc3339(),
            event_count: events.len(),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
