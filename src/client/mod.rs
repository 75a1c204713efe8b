mod bootstrap;
mod core;
mod outcome;
mod queue;
mod state;
mod submission;

pub use bootstrap::Bootstrap;
pub use core::{Client, ClientBuilder};
pub use outcome::Outcome;
pub use state::InstanceState;
pub use submission::Submission;
