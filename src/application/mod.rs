//! Application layer - services and handlers.
//!
//! This layer sequences domain operations and coordinates between ports:
//! the history service, the animation tick source, and the decision cycle.

pub mod animation_runner;
pub mod handlers;
pub mod history_store;

pub use animation_runner::{AnimationRunner, RunOutcome};
pub use handlers::{SpinCommand, SpinError, SpinHandler, SpinOutcome, SpinSession, SpinTicket};
pub use history_store::{HistoryStore, DEFAULT_RECENT_LIMIT};
