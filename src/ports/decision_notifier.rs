//! DecisionNotifier port - Interface for user-facing feedback on decisions.
//!
//! The core calls this after each decision cycle; the presentation shell
//! turns the calls into transient notifications.

use crate::domain::foundation::DomainError;
use crate::domain::history::Decision;

/// Port receiving the outcome of each decision cycle.
///
/// Failures reported here are transient: the user can keep interacting.
pub trait DecisionNotifier: Send + Sync {
    /// A decision was revealed and recorded in the history.
    fn decision_made(&self, decision: &Decision);

    /// A decision could not be completed or saved.
    fn decision_failed(&self, error: &DomainError);
}
