//! # Submission results.
//!
//! [`Client::submit`](crate::Client::submit) returns a tagged result instead
//! of an overloaded return shape: either the event is tracked by an
//! [`Outcome`], or the caller has been elected to run the bootstrap.

use super::bootstrap::Bootstrap;
use super::outcome::Outcome;

/// Result of one `submit` call.
pub enum Submission {
    /// The event was dispatched, queued, or rejected; the outcome resolves
    /// with its delivery result.
    Accepted(Outcome),

    /// The event was queued, and this caller (the first one observed while
    /// uninitialized) must invoke [`Bootstrap::run`] to start the handshake.
    ///
    /// Exactly one `NeedsBootstrap` is returned per client lifetime.
    NeedsBootstrap(Bootstrap),
}

impl Submission {
    /// True if this submission carries a bootstrap obligation.
    pub fn needs_bootstrap(&self) -> bool {
        matches!(self, Submission::NeedsBootstrap(_))
    }
}
