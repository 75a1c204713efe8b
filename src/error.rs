//! Error types used by the telemetry client.
//!
//! This module defines two main error enums:
//!
//! - [`ConfigError`] — construction-time validation failures; fatal, no client
//!   object is built.
//! - [`DeliverError`] — the outcome of a single event's delivery attempt,
//!   reported only through that event's own completion handle.
//!
//! Both types provide `as_label` helpers for logging/metrics.

use thiserror::Error;

use crate::transport::TransportError;

/// Result of a single event's delivery attempt.
pub type DeliverResult = Result<(), DeliverError>;

/// # Errors raised while constructing a [`Client`](crate::Client).
///
/// Construction errors are fatal: the builder returns `Err` and no client
/// object exists afterwards.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The collector credential is empty or missing.
    #[error("license key is required")]
    MissingLicenseKey,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use telegate::ConfigError;
    ///
    /// assert_eq!(ConfigError::MissingLicenseKey.as_label(), "config_missing_license_key");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::MissingLicenseKey => "config_missing_license_key",
        }
    }
}

/// # Per-event delivery outcomes.
///
/// A failed delivery never affects other queued or subsequent events; each
/// error reaches exactly one caller, through that event's
/// [`Outcome`](crate::Outcome).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliverError {
    /// The collector refused the event (non-success response).
    #[error("collector rejected delivery (status {status})")]
    Rejected {
        /// Status code reported by the collector.
        status: u16,
    },

    /// Network-level failure while talking to the collector.
    #[error("transport failure: {message}")]
    Transport {
        /// The underlying transport error message.
        message: String,
    },

    /// The one-time initialization handshake failed; the client permanently
    /// refuses delivery (see the Failed-state policy in DESIGN.md).
    #[error("instance initialization failed; event not delivered")]
    InitializationFailed,

    /// The submission queue was at capacity; the event was not enqueued.
    #[error("submission queue full; event dropped")]
    QueueFull,

    /// The client was dropped before this event's outcome resolved.
    #[error("delivery canceled: client dropped")]
    Canceled,
}

impl DeliverError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use telegate::DeliverError;
    ///
    /// let err = DeliverError::Rejected { status: 403 };
    /// assert_eq!(err.as_label(), "deliver_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DeliverError::Rejected { .. } => "deliver_rejected",
            DeliverError::Transport { .. } => "deliver_transport",
            DeliverError::InitializationFailed => "deliver_init_failed",
            DeliverError::QueueFull => "deliver_queue_full",
            DeliverError::Canceled => "deliver_canceled",
        }
    }
}

impl From<TransportError> for DeliverError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Rejected { status } => DeliverError::Rejected { status },
            TransportError::Malformed { detail } => DeliverError::Transport { message: detail },
            TransportError::Network { message } => DeliverError::Transport { message },
        }
    }
}
