//! Notifier that only writes structured log lines.

use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::history::Decision;
use crate::ports::DecisionNotifier;

/// Logs each decision outcome through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionNotifier for TracingNotifier {
    fn decision_made(&self, decision: &Decision) {
        info!(
            decision_id = %decision.id,
            method = %decision.method,
            winner = %decision.winner.text,
            options = decision.options.len(),
            "Decision made"
        );
    }

    fn decision_failed(&self, error: &DomainError) {
        warn!(code = %error.code, error = %error.message, "Decision failed");
    }
}
