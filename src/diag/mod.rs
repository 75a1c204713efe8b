mod event;
mod sink;

pub use event::{DiagEvent, DiagKind, Level};
pub use sink::Diag;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
