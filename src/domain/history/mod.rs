//! History module - recorded decisions.
//!
//! [`DecisionLog`] is the pure, bounded sequence; persistence and the
//! async service surface live in `application::history`.

mod decision;
mod log;

pub use decision::{Decision, DecisionDraft, DecisionPatch, MIN_DECISION_OPTIONS};
pub use log::{
    DecisionLog, DecisionStats, HistoryError, RecentActivity, DEFAULT_CAPACITY,
    RECENT_ACTIVITY_LEN,
};
