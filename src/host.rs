//! # Machine identity, resolved once per process.
//!
//! [`HostIdentity`] carries the hostname / IP / OS fields attached to every
//! collector request. Resolution is a one-time, effectively-immutable lookup:
//! [`HostIdentity::detect`] memoizes the result process-wide, and the client
//! receives the value by injection rather than recomputing it per call.

use std::net::UdpSocket;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static IDENTITY: OnceLock<HostIdentity> = OnceLock::new();

/// Network identity of the local machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    /// Machine hostname, `"unknown"` when it cannot be resolved.
    pub hostname: String,

    /// Outbound IPv4/IPv6 address, `"0.0.0.0"` when no route is available.
    pub ip: String,

    /// Operating system family (`linux`, `macos`, `windows`, ...).
    pub os: String,
}

impl HostIdentity {
    /// Returns the process-wide identity, resolving it on first call.
    pub fn detect() -> &'static HostIdentity {
        IDENTITY.get_or_init(Self::resolve)
    }

    /// Builds an identity from explicit parts (tests, containers with
    /// externally-known addresses).
    pub fn named(
        hostname: impl Into<String>,
        ip: impl Into<String>,
        os: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
            os: os.into(),
        }
    }

    fn resolve() -> Self {
        let hostname = std::fs::read_to_string("/etc/hostname")
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            hostname,
            ip: local_ip().unwrap_or_else(|| "0.0.0.0".to_string()),
            os: std::env::consts::OS.to_string(),
        }
    }
}

/// Discovers the outbound address via the routing table: connecting a UDP
/// socket selects a local interface without sending any traffic.
fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}
