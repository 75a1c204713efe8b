//! # Request events observed by the host application.
//!
//! [`RequestEvent`] is an immutable record of one observed request. Events are
//! value objects: no identity beyond queue position, cheap to clone, and
//! serialized as-is onto the wire.
//!
//! ## Example
//! ```rust
//! use telegate::RequestEvent;
//!
//! let ev = RequestEvent::new("GET", "/users/42", 1_700_000_000_000, 12.5);
//! assert_eq!(ev.method, "GET");
//! assert_eq!(ev.duration, 12.5);
//! ```

use serde::{Deserialize, Serialize};

/// One observed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Wall-clock start of the request, in epoch milliseconds.
    pub start_time: u64,

    /// Resource identifier (route or URL path).
    pub path: String,

    /// Elapsed time in milliseconds. Never negative.
    pub duration: f64,

    /// Verb or operation name (`GET`, `POST`, `query`, ...).
    pub method: String,
}

impl RequestEvent {
    /// Creates a new event.
    ///
    /// Negative durations are clamped to `0.0` (the field is defined as a
    /// non-negative elapsed time).
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        start_time: u64,
        duration: f64,
    ) -> Self {
        Self {
            start_time,
            path: path.into(),
            duration: duration.max(0.0),
            method: method.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_duration_clamped() {
        let ev = RequestEvent::new("GET", "/x", 1_000, -4.2);
        assert_eq!(ev.duration, 0.0);
    }

    #[test]
    fn test_nan_duration_clamped() {
        // f64::max(NaN, 0.0) picks the non-NaN operand.
        let ev = RequestEvent::new("GET", "/x", 1_000, f64::NAN);
        assert_eq!(ev.duration, 0.0);
    }
}
