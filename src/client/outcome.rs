//! # Completion handles.
//!
//! Every submission produces a pair: the queue-owned [`PendingRequest`]
//! (event + resolver) and the caller-owned [`Outcome`]. The pending side is
//! owned exclusively by the queue from enqueue until it is handed to the
//! transport; the outcome is the sole way the original caller learns the
//! delivery result. Each handle resolves exactly once.

use tokio::sync::oneshot;

use crate::error::{DeliverError, DeliverResult};
use crate::events::RequestEvent;

/// Caller-visible handle for one submitted event's delivery result.
pub struct Outcome {
    rx: oneshot::Receiver<DeliverResult>,
}

impl Outcome {
    /// Waits for the delivery result.
    ///
    /// Never pends indefinitely under normal operation: every enqueued entry
    /// is resolved by a drain pass, a failure transition, or an overflow
    /// rejection. A dropped client surfaces as [`DeliverError::Canceled`].
    pub async fn wait(self) -> DeliverResult {
        self.rx.await.unwrap_or(Err(DeliverError::Canceled))
    }

    /// Creates an already-settled outcome.
    pub(crate) fn resolved(result: DeliverResult) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { rx }
    }
}

/// Queue entry pairing an event with its completion resolver.
pub(crate) struct PendingRequest {
    pub(crate) event: RequestEvent,
    done: oneshot::Sender<DeliverResult>,
}

impl PendingRequest {
    /// Creates an entry and its paired caller handle.
    pub(crate) fn new(event: RequestEvent) -> (Self, Outcome) {
        let (tx, rx) = oneshot::channel();
        (Self { event, done: tx }, Outcome { rx })
    }

    /// Reports this event's delivery result to the original caller.
    ///
    /// Consumes the entry; a handle can never resolve twice. The send result
    /// is ignored: a caller that dropped its `Outcome` opted out of the
    /// answer.
    pub(crate) fn resolve(self, result: DeliverResult) {
        let _ = self.done.send(result);
    }
}
