//! Application handlers.
//!
//! `SpinHandler` runs one decision cycle; `SpinSession` holds the form and
//! confirmation state around it.

mod spin_decision;
mod spin_session;

pub use spin_decision::{SpinCommand, SpinError, SpinHandler, SpinOutcome};
pub use spin_session::{SpinSession, SpinTicket};
