//! Notifier that forwards outcomes to a presentation collaborator.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::history::Decision;
use crate::ports::DecisionNotifier;

/// A user-facing notification about a decision cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionNotice {
    Made { decision: Decision },
    Failed { code: String, message: String },
}

/// Sends a [`DecisionNotice`] per outcome on an unbounded tokio channel.
///
/// A dropped receiver is not an error; notices are simply discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<DecisionNotice>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<DecisionNotice>) -> Self {
        Self { sender }
    }

    /// Creates a notifier together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DecisionNotice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, notice: DecisionNotice) {
        if self.sender.send(notice).is_err() {
            debug!("Notification receiver dropped; notice discarded");
        }
    }
}

impl DecisionNotifier for ChannelNotifier {
    fn decision_made(&self, decision: &Decision) {
        self.send(DecisionNotice::Made {
            decision: decision.clone(),
        });
    }

    fn decision_failed(&self, error: &DomainError) {
        self.send(DecisionNotice::Failed {
            code: error.code.to_string(),
            message: error.message.clone(),
        });
    }
}
