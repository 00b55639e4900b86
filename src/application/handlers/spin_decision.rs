//! SpinHandler - Command handler for one decision cycle.
//!
//! Sequencing is strict: select the winner, then animate, then record.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::application::animation_runner::{AnimationRunner, RunOutcome};
use crate::application::history_store::HistoryStore;
use crate::domain::animation::{driver_for, AnimationFrame, AnimationKind};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::history::{Decision, DecisionDraft, HistoryError};
use crate::domain::options::Choice;
use crate::domain::selection::{select, SelectionError, MIN_SELECTABLE};
use crate::ports::{DecisionNotifier, RandomSource};

/// Command to run one decision cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinCommand {
    /// Options as entered; blank entries are ignored.
    pub options: Vec<Choice>,
    pub method: AnimationKind,
}

impl SpinCommand {
    pub fn new(options: Vec<Choice>, method: AnimationKind) -> Self {
        Self { options, method }
    }

    /// Options with visible text, in order.
    pub fn valid_options(&self) -> Vec<Choice> {
        self.options.iter().filter(|c| c.is_valid()).cloned().collect()
    }
}

/// Result of a decision cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    /// Revealed and recorded.
    Decided(Decision),
    /// Cancelled before the reveal; nothing was recorded.
    Aborted,
}

impl SpinOutcome {
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            SpinOutcome::Decided(decision) => Some(decision),
            SpinOutcome::Aborted => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    #[error(transparent)]
    InvalidInput(#[from] SelectionError),

    #[error("{method} cannot show {count} options")]
    UnsupportedMethod { method: AnimationKind, count: usize },

    #[error("A spin is already in progress")]
    AlreadySpinning,

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl SpinError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SpinError::InvalidInput(e) => e.code(),
            SpinError::UnsupportedMethod { .. } => ErrorCode::UnsupportedMethod,
            SpinError::AlreadySpinning => ErrorCode::InvalidStateTransition,
            SpinError::History(e) => e.code(),
        }
    }
}

impl From<SpinError> for DomainError {
    fn from(err: SpinError) -> Self {
        match err {
            SpinError::History(inner) => inner.into(),
            SpinError::UnsupportedMethod { method, count } => DomainError::new(
                ErrorCode::UnsupportedMethod,
                format!("{} cannot show {} options", method, count),
            )
            .with_detail("method", method.as_str())
            .with_detail("count", count.to_string()),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

/// Handler that runs a full decision cycle.
pub struct SpinHandler {
    history: Arc<HistoryStore>,
    rng: Arc<dyn RandomSource>,
    notifier: Arc<dyn DecisionNotifier>,
    runner: AnimationRunner,
}

impl SpinHandler {
    pub fn new(
        history: Arc<HistoryStore>,
        rng: Arc<dyn RandomSource>,
        notifier: Arc<dyn DecisionNotifier>,
        runner: AnimationRunner,
    ) -> Self {
        Self {
            history,
            rng,
            notifier,
            runner,
        }
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    /// Selects, animates and records one decision.
    ///
    /// Frames are passed to `on_frame` as they render. Setting `cancel` to
    /// `true` before the reveal aborts the cycle without recording.
    pub async fn handle<F>(
        &self,
        cmd: SpinCommand,
        cancel: watch::Receiver<bool>,
        on_frame: F,
    ) -> Result<SpinOutcome, SpinError>
    where
        F: FnMut(&AnimationFrame),
    {
        // 1. Validate the option snapshot and the method
        let options = cmd.valid_options();
        if options.len() >= MIN_SELECTABLE && !cmd.method.driver_accepts(options.len()) {
            return Err(SpinError::UnsupportedMethod {
                method: cmd.method,
                count: options.len(),
            });
        }

        // 2. Choose the winner before anything moves
        let selection = select(&options, self.rng.as_ref())?;
        debug!(
            method = %cmd.method,
            options = options.len(),
            index = selection.index,
            "Winner selected"
        );

        // 3. Dramatize it
        let mut driver = driver_for(cmd.method);
        let outcome = self
            .runner
            .run(
                driver.as_mut(),
                &options,
                &selection.winner,
                self.rng.as_ref(),
                cancel,
                on_frame,
            )
            .await;
        if outcome == RunOutcome::Aborted {
            warn!(method = %cmd.method, "Decision cycle aborted; nothing recorded");
            return Ok(SpinOutcome::Aborted);
        }

        // 4. Record and notify
        let draft = DecisionDraft::new(options, selection.winner).with_method(cmd.method);
        match self.history.create(draft).await {
            Ok(decision) => {
                self.notifier.decision_made(&decision);
                Ok(SpinOutcome::Decided(decision))
            }
            Err(e) => {
                let error = SpinError::from(e);
                self.notifier.decision_failed(&error.clone().into());
                Err(error)
            }
        }
    }
}
