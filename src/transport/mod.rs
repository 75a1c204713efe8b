//! # Transport: the delivery boundary between the client and the collector.
//!
//! [`Transport`] abstracts the two wire exchanges the client performs:
//! the one-time instance-creation handshake and per-event delivery.
//!
//! ## Contract
//! - Implementations never panic across this boundary; every failure is a
//!   typed [`TransportError`] value.
//! - A single event's delivery failure must never block delivery of other
//!   events; the client relies on this to keep outcomes independent.
//! - No timeout policy is imposed here; implementations own their own
//!   deadlines (see [`HttpTransport`](crate::HttpTransport) for the
//!   reference binding, `http` feature).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::RequestEvent;
use crate::host::HostIdentity;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpTransport;

/// Instance-creation request: sent once, before any event delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRequest {
    /// Logical application name from [`ClientConfig`](crate::ClientConfig).
    pub app_name: String,
    /// Deployment environment supplied by the bootstrap caller.
    pub environment: String,
    /// Schema context supplied by the bootstrap caller.
    pub schema: serde_json::Value,
    /// Machine identity of this client.
    pub host: HostIdentity,
}

/// Successful instance-creation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceResponse {
    /// Opaque identifier for this client's registration with the collector.
    pub instance_id: String,
}

/// Per-event delivery request. The response carries no payload; only the
/// success/failure indicator is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    /// The observed request being reported.
    pub event: RequestEvent,
    /// Instance identifier obtained at initialization.
    pub instance_id: String,
    /// Machine identity of this client.
    pub host: HostIdentity,
}

/// # Errors produced by transport implementations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The collector answered with a non-success status.
    #[error("collector returned status {status}")]
    Rejected {
        /// Status code reported by the collector.
        status: u16,
    },

    /// The collector answered success but the body could not be decoded.
    #[error("malformed collector response: {detail}")]
    Malformed {
        /// Decoding failure description.
        detail: String,
    },

    /// The exchange failed below the protocol level (DNS, connect, timeout).
    #[error("network error: {message}")]
    Network {
        /// The underlying error message.
        message: String,
    },
}

impl TransportError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TransportError::Rejected { .. } => "transport_rejected",
            TransportError::Malformed { .. } => "transport_malformed",
            TransportError::Network { .. } => "transport_network",
        }
    }
}

/// Contract for collector transports.
///
/// Both calls run on the client's async runtime; implementations should use
/// async I/O and must convert every failure into a [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Registers this client with the collector.
    ///
    /// Called exactly once per client lifetime, by the initialization
    /// handshake. A non-success or malformed response moves the client to
    /// its terminal `Failed` state.
    async fn create_instance(
        &self,
        request: &InstanceRequest,
    ) -> Result<InstanceResponse, TransportError>;

    /// Delivers one event to the collector.
    ///
    /// The outcome is reported to the event's original submitter; it never
    /// propagates to the client's lifecycle state.
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), TransportError>;
}
