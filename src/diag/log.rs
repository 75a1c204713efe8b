//! # Simple logging sink for debugging and demos.
//!
//! [`LogWriter`] prints diagnostics events to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [info] [initialize_started] environment=prod
//! [info] [instance_ready] id=abc123
//! [info] [event_queued] depth=2
//! [warn] [queue_overflow] capacity=1024
//! [info] [drain_started] entries=2
//! [warn] [delivery_failed] err="collector returned status 500"
//! ```

use super::{Diag, DiagEvent, DiagKind};

/// Simple stdout diagnostics sink.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`Diag`] for structured logging or metrics collection.
pub struct LogWriter;

impl Diag for LogWriter {
    fn record(&self, e: &DiagEvent) {
        let level = e.level().as_str();
        let label = e.kind.as_label();
        let detail = e.detail.as_deref().unwrap_or("-");

        match e.kind {
            DiagKind::InitializeStarted => {
                println!("[{level}] [{label}] environment={detail}");
            }
            DiagKind::InitializeIgnored => {
                println!("[{level}] [{label}] state={detail}");
            }
            DiagKind::InstanceReady => {
                println!("[{level}] [{label}] id={detail}");
            }
            DiagKind::InstanceFailed | DiagKind::DeliveryFailed => {
                println!("[{level}] [{label}] err={detail:?}");
            }
            DiagKind::EventQueued => {
                println!("[{level}] [{label}] depth={}", e.queued.unwrap_or(0));
            }
            DiagKind::QueueOverflow => {
                println!("[{level}] [{label}] capacity={}", e.queued.unwrap_or(0));
            }
            DiagKind::DrainStarted => {
                println!("[{level}] [{label}] entries={}", e.queued.unwrap_or(0));
            }
            DiagKind::DrainFinished => {
                println!("[{level}] [{label}]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
