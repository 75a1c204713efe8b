//! # Client configuration.
//!
//! Provides [`ClientConfig`] — centralized settings for the telemetry client.
//!
//! ## Sentinel values
//! - `queue_capacity = 0` → unbounded (no overflow rejection)

use crate::error::ConfigError;

/// Configuration for the telemetry client.
///
/// ## Field semantics
/// - `license_key`: collector credential; **required**, validated at build time
/// - `app_name`: logical application name reported at initialization
/// - `queue_capacity`: bound for events buffered before the handshake
///   completes (`0` = unbounded)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Credential sent with every collector request.
    ///
    /// An empty key fails [`Client::new`](crate::Client::new) with
    /// [`ConfigError::MissingLicenseKey`]; no client object is constructed.
    pub license_key: String,

    /// Logical application name, included in the initialization request.
    pub app_name: String,

    /// Maximum number of events buffered while the client is not ready.
    ///
    /// - `0` = unbounded
    /// - `n > 0` = submissions beyond `n` pending entries are rejected with
    ///   [`DeliverError::QueueFull`](crate::DeliverError::QueueFull)
    pub queue_capacity: usize,
}

impl ClientConfig {
    /// Creates a configuration with the given credential and defaults:
    ///
    /// - `app_name = "default"`
    /// - `queue_capacity = 1024`
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            license_key: license_key.into(),
            app_name: "default".to_string(),
            queue_capacity: 1024,
        }
    }

    /// Returns the queue bound as an `Option`.
    ///
    /// - `None` → unbounded
    /// - `Some(n)` → at most `n` pending entries
    #[inline]
    pub fn queue_bound(&self) -> Option<usize> {
        if self.queue_capacity == 0 {
            None
        } else {
            Some(self.queue_capacity)
        }
    }

    /// Validates construction-time requirements.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.license_key.trim().is_empty() {
            return Err(ConfigError::MissingLicenseKey);
        }
        Ok(())
    }
}
