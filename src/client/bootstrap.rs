//! # Deferred bootstrap action.
//!
//! The very first submission observed while the client is uninitialized
//! returns a [`Bootstrap`] alongside queueing the event like any other. The
//! host supplies the environment/schema context the client itself does not
//! know, which is why initialization cannot start on its own.

use std::sync::Arc;

use serde_json::Value;

use super::core::ClientCore;
use super::outcome::Outcome;
use crate::error::DeliverResult;

/// One-shot action that starts the initialization handshake.
///
/// Consuming `run` makes a second invocation unrepresentable; redundant
/// triggers from other paths are absorbed by the idempotent initialize step.
pub struct Bootstrap {
    core: Arc<ClientCore>,
    outcome: Outcome,
}

impl Bootstrap {
    pub(super) fn new(core: Arc<ClientCore>, outcome: Outcome) -> Self {
        Self { core, outcome }
    }

    /// Runs the handshake, re-triggers a drain attempt, and waits for this
    /// caller's own event to be delivered.
    ///
    /// The initialization error itself is swallowed at this layer (it is
    /// recorded on the diagnostics channel); the returned result is the
    /// caller's event outcome, which reflects the failure as
    /// [`DeliverError::InitializationFailed`](crate::DeliverError::InitializationFailed).
    pub async fn run(self, environment: impl Into<String>, schema: Value) -> DeliverResult {
        self.core.initialize(environment.into(), schema).await;
        self.core.drain();
        self.outcome.wait().await
    }
}
