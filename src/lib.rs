//! # telegate
//!
//! **Telegate** is a lazily-initializing telemetry client.
//!
//! It buffers "request observed" events produced synchronously by a host
//! application and ships them to a remote collector, deferring all network
//! activity until an out-of-band initialization handshake completes. The
//! handshake needs context (environment, schema) only the host can supply,
//! so the first submission hands the host a deferred bootstrap action
//! instead of firing the handshake itself.
//!
//! ## Architecture
//! ```text
//!     host app ──submit(event)──► Client
//!                                   │
//!                 ┌─────────────────┴──────────────────┐
//!                 │ Uninitialized / Initializing:      │
//!                 │   event → SubmitQueue (FIFO)       │
//!                 │   first caller ← Bootstrap         │
//!                 │ Ready(id):                         │
//!                 │   event → delivery task            │
//!                 │ Failed:                            │
//!                 │   outcome ← InitializationFailed   │
//!                 └─────────────────┬──────────────────┘
//!                                   ▼
//!     Bootstrap::run(env, schema) ──► initialize ──► Transport::create_instance
//!                                   │ success: Ready(id) → drain() (FIFO)
//!                                   ▼
//!                              Transport::deliver (one call per event)
//! ```
//!
//! Three guarantees hold regardless of how submissions interleave with the
//! handshake:
//!
//! 1. the handshake fires at most once per client lifetime;
//! 2. buffered events are delivered in arrival order;
//! 3. every submission resolves exactly once: delivered, rejected, or
//!    failed, never silently dropped.
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits              |
//! |-----------------|----------------------------------------------------------|---------------------------------|
//! | **Client**      | Lifecycle state machine + FIFO submission queue.         | [`Client`], [`Submission`]      |
//! | **Bootstrap**   | Deferred first-caller initialization action.             | [`Bootstrap`]                   |
//! | **Outcomes**    | Per-event completion handles.                            | [`Outcome`], [`DeliverError`]   |
//! | **Transport**   | Collector wire boundary (bring your own, or `http`).     | [`Transport`], [`TransportError`] |
//! | **Diagnostics** | Level-tagged observability channel, inert when disabled. | [`Diag`], [`DiagEvent`]         |
//! | **Identity**    | Machine identity resolved once per process.              | [`HostIdentity`]                |
//!
//! ## Optional features
//! - `http`: exports [`HttpTransport`], a reqwest-based reference binding.
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! The client spawns its delivery tasks on the ambient tokio runtime;
//! construct and use it from within one.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use telegate::{
//!     Client, ClientConfig, DeliveryRequest, InstanceRequest, InstanceResponse,
//!     RequestEvent, Submission, Transport, TransportError,
//! };
//!
//! struct Collector;
//!
//! #[async_trait::async_trait]
//! impl Transport for Collector {
//!     async fn create_instance(
//!         &self,
//!         _request: &InstanceRequest,
//!     ) -> Result<InstanceResponse, TransportError> {
//!         Ok(InstanceResponse { instance_id: "abc123".into() })
//!     }
//!
//!     async fn deliver(&self, _request: &DeliveryRequest) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("license-key"), Arc::new(Collector))?;
//!
//!     let event = RequestEvent::new("GET", "/users", 1_700_000_000_000, 12.5);
//!     match client.submit(event) {
//!         Submission::NeedsBootstrap(bootstrap) => {
//!             // First submission: this caller owns the handshake.
//!             bootstrap.run("prod", serde_json::json!({})).await?;
//!         }
//!         Submission::Accepted(outcome) => {
//!             outcome.wait().await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod diag;
mod error;
mod events;
mod host;
mod transport;

// ---- Public re-exports ----

pub use client::{Bootstrap, Client, ClientBuilder, InstanceState, Outcome, Submission};
pub use config::ClientConfig;
pub use diag::{Diag, DiagEvent, DiagKind, Level};
pub use error::{ConfigError, DeliverError, DeliverResult};
pub use events::RequestEvent;
pub use host::HostIdentity;
pub use transport::{
    DeliveryRequest, InstanceRequest, InstanceResponse, Transport, TransportError,
};

// Optional: expose the reqwest-based collector binding.
// Enable with: `--features http`
#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Optional: expose a simple built-in diagnostics sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use diag::LogWriter;
