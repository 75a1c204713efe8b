//! # Diagnostics sink trait
//!
//! `Diag` is the extension point for plugging a structured log sink into the
//! client. The client calls [`Diag::record`] synchronously on its own call
//! path, so implementations must be cheap and non-blocking; hand the event
//! to a channel or a lock-free buffer if real I/O is involved.
//!
//! ## Contract
//! - `record` must not block and must not panic.
//! - The sink observes events; it can never influence client behavior.

use super::DiagEvent;

/// Contract for diagnostics sinks.
pub trait Diag: Send + Sync + 'static {
    /// Handle a single diagnostics event.
    fn record(&self, event: &DiagEvent);

    /// Human-readable name (for meta-diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
