//! # Diagnostics events emitted by the client.
//!
//! The [`DiagKind`] enum classifies what happened; [`Level`] tags each kind as
//! `info`, `warn`, or `error`. Every state transition and queue operation
//! produces one event. The channel is purely observational: it never affects
//! control flow, and with no sink installed nothing is recorded at all.
//!
//! ## Example
//! ```rust
//! use telegate::{DiagEvent, DiagKind, Level};
//!
//! let ev = DiagEvent::new(DiagKind::QueueOverflow).with_queued(1024);
//! assert_eq!(ev.level(), Level::Warn);
//! assert_eq!(ev.kind.as_label(), "queue_overflow");
//! ```

use std::sync::Arc;
use std::time::SystemTime;

/// Severity tag attached to every diagnostics event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Returns the lowercase name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Classification of diagnostics events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagKind {
    // === Instance lifecycle ===
    /// The initialization handshake was started.
    ///
    /// Sets `detail`: environment name.
    InitializeStarted,

    /// A redundant `initialize` call was ignored (state was no longer
    /// `Uninitialized`).
    ///
    /// Sets `detail`: current state label.
    InitializeIgnored,

    /// The handshake succeeded; the client is ready.
    ///
    /// Sets `detail`: collector-assigned instance id.
    InstanceReady,

    /// The handshake failed; the client is permanently failed.
    ///
    /// Sets `detail`: transport error message.
    InstanceFailed,

    // === Queue operations ===
    /// An event was buffered while the client was not ready.
    ///
    /// Sets `queued`: queue depth after the insert.
    EventQueued,

    /// An event was rejected because the queue was at capacity.
    ///
    /// Sets `queued`: the configured capacity.
    QueueOverflow,

    /// A drain pass started.
    ///
    /// Sets `queued`: number of entries removed for delivery.
    DrainStarted,

    /// A drain pass finished; the re-entrancy guard was released.
    DrainFinished,

    // === Delivery ===
    /// A single event's transport call failed.
    ///
    /// Sets `detail`: transport error message.
    DeliveryFailed,
}

impl DiagKind {
    /// Severity of this kind.
    pub fn level(&self) -> Level {
        match self {
            DiagKind::InitializeStarted
            | DiagKind::InstanceReady
            | DiagKind::EventQueued
            | DiagKind::DrainStarted
            | DiagKind::DrainFinished => Level::Info,
            DiagKind::InitializeIgnored | DiagKind::QueueOverflow | DiagKind::DeliveryFailed => {
                Level::Warn
            }
            DiagKind::InstanceFailed => Level::Error,
        }
    }

    /// Returns a short stable label (snake_case) for use in log lines.
    pub fn as_label(&self) -> &'static str {
        match self {
            DiagKind::InitializeStarted => "initialize_started",
            DiagKind::InitializeIgnored => "initialize_ignored",
            DiagKind::InstanceReady => "instance_ready",
            DiagKind::InstanceFailed => "instance_failed",
            DiagKind::EventQueued => "event_queued",
            DiagKind::QueueOverflow => "queue_overflow",
            DiagKind::DrainStarted => "drain_started",
            DiagKind::DrainFinished => "drain_finished",
            DiagKind::DeliveryFailed => "delivery_failed",
        }
    }
}

/// Diagnostics event with optional metadata.
#[derive(Debug, Clone)]
pub struct DiagEvent {
    /// Event classification.
    pub kind: DiagKind,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Human-readable detail (ids, error messages, state labels).
    pub detail: Option<Arc<str>>,
    /// Queue-related count (depth, capacity, batch size).
    pub queued: Option<usize>,
}

impl DiagEvent {
    /// Creates a new event of the given kind with the current timestamp.
    pub fn new(kind: DiagKind) -> Self {
        Self {
            kind,
            at: SystemTime::now(),
            detail: None,
            queued: None,
        }
    }

    /// Attaches a human-readable detail.
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches a queue-related count.
    #[inline]
    pub fn with_queued(mut self, n: usize) -> Self {
        self.queued = Some(n);
        self
    }

    /// Severity of this event (derived from its kind).
    #[inline]
    pub fn level(&self) -> Level {
        self.kind.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(DiagKind::InstanceReady.level(), Level::Info);
        assert_eq!(DiagKind::InitializeIgnored.level(), Level::Warn);
        assert_eq!(DiagKind::QueueOverflow.level(), Level::Warn);
        assert_eq!(DiagKind::DeliveryFailed.level(), Level::Warn);
        assert_eq!(DiagKind::InstanceFailed.level(), Level::Error);
    }

    #[test]
    fn test_builder_metadata() {
        let ev = DiagEvent::new(DiagKind::DrainStarted)
            .with_queued(3)
            .with_detail("abc123");
        assert_eq!(ev.queued, Some(3));
        assert_eq!(ev.detail.as_deref(), Some("abc123"));
    }
}
