use std::sync::Arc;

/// Lifecycle state of the collector registration.
///
/// The only legal transitions are:
///
/// ```text
/// Uninitialized --initialize()--> Initializing --success--> Ready(id)
///                                       |
///                                       +--------failure--> Failed
/// ```
///
/// `Uninitialized → Initializing` happens at most once per client lifetime;
/// `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    /// No initialization attempt observed yet.
    Uninitialized,

    /// Handshake in flight.
    Initializing,

    /// Handshake succeeded; holds the collector-assigned instance id.
    Ready(Arc<str>),

    /// Handshake failed. The client permanently refuses delivery.
    Failed,
}

impl InstanceState {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            InstanceState::Uninitialized => "uninitialized",
            InstanceState::Initializing => "initializing",
            InstanceState::Ready(_) => "ready",
            InstanceState::Failed => "failed",
        }
    }

    /// True for `Ready` and `Failed`; no transition leaves either.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InstanceState::Ready(_) | InstanceState::Failed)
    }
}
