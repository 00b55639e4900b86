//! SpinSession - state behind the spin form and result confirmation.
//!
//! Tracks the option set, the chosen method, whether an animation is in
//! flight and the result awaiting confirmation. It never runs a spin
//! itself: `begin_spin` hands out a [`SpinTicket`] for [`SpinHandler`],
//! and `finish_spin` takes the handler's result back.
//!
//! The session owns the cancel signal of the spin it started. Any option
//! edit while animating, a `repeat`, an explicit `cancel_spin` or dropping
//! the session fires it, so a winner drawn from stale options is never
//! revealed.
//!
//! [`SpinHandler`]: super::SpinHandler

use tokio::sync::watch;
use tracing::debug;

use super::spin_decision::{SpinCommand, SpinError, SpinOutcome};
use crate::domain::animation::{AnimationKind, Availability};
use crate::domain::foundation::OptionId;
use crate::domain::history::Decision;
use crate::domain::options::{
    Choice, OptionAvailability, OptionSet, OptionSetError, QuickPreset,
};
use crate::domain::selection::{SelectionError, MIN_SELECTABLE};

/// A started spin: the command to run and the signal that cancels it.
#[derive(Debug)]
pub struct SpinTicket {
    pub command: SpinCommand,
    pub cancel: watch::Receiver<bool>,
}

#[derive(Debug, Default)]
pub struct SpinSession {
    options: OptionSet,
    method: AnimationKind,
    animating: bool,
    pending: Option<Decision>,
    cancel: Option<watch::Sender<bool>>,
}

impl SpinSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OptionSet) -> Self {
        Self {
            options,
            method: AnimationKind::default(),
            animating: false,
            pending: None,
            cancel: None,
        }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn method(&self) -> AnimationKind {
        self.method
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Result waiting for accept or respin.
    pub fn pending(&self) -> Option<&Decision> {
        self.pending.as_ref()
    }

    pub fn availability(&self) -> OptionAvailability {
        self.options.availability()
    }

    /// Picker state of `kind` for the current valid option count.
    pub fn method_availability(&self, kind: AnimationKind) -> Availability {
        kind.availability(self.availability().valid, self.method)
    }

    /// Switches method unless it is disabled for the current options.
    pub fn select_method(&mut self, kind: AnimationKind) -> Result<(), SpinError> {
        let count = self.availability().valid;
        if kind.availability(count, self.method) == Availability::Disabled {
            return Err(SpinError::UnsupportedMethod {
                method: kind,
                count,
            });
        }
        self.method = kind;
        Ok(())
    }

    pub fn add_option(&mut self) -> Result<&Choice, OptionSetError> {
        self.cancel_spin();
        self.options.add_blank()
    }

    pub fn remove_option(&mut self, id: &OptionId) -> Result<Choice, OptionSetError> {
        self.cancel_spin();
        self.options.remove(id)
    }

    pub fn set_option_text(&mut self, id: &OptionId, text: &str) -> Result<(), OptionSetError> {
        self.cancel_spin();
        self.options.set_text(id, text)
    }

    pub fn cycle_option_color(&mut self, id: &OptionId) -> Result<&str, OptionSetError> {
        self.cancel_spin();
        self.options.cycle_color(id)
    }

    pub fn clear_option_texts(&mut self) {
        self.cancel_spin();
        self.options.clear_texts();
    }

    pub fn apply_preset(&mut self, preset: QuickPreset) {
        self.cancel_spin();
        self.options.apply_preset(preset);
    }

    /// Marks a spin as started and returns the command to run.
    pub fn begin_spin(&mut self) -> Result<SpinTicket, SpinError> {
        if self.animating {
            return Err(SpinError::AlreadySpinning);
        }
        let options = self.options.valid_choices();
        if options.len() < MIN_SELECTABLE {
            return Err(SpinError::InvalidInput(SelectionError::InvalidInput {
                required: MIN_SELECTABLE,
                actual: options.len(),
            }));
        }
        let (tx, rx) = watch::channel(false);
        self.animating = true;
        self.pending = None;
        self.cancel = Some(tx);
        Ok(SpinTicket {
            command: SpinCommand::new(options, self.method),
            cancel: rx,
        })
    }

    /// Fires the cancel signal of the running spin, if any.
    ///
    /// Returns whether a running spin was signalled.
    pub fn cancel_spin(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        match &self.cancel {
            Some(tx) if !*tx.borrow() => {
                tx.send_replace(true);
                debug!(method = %self.method, "Running spin cancelled");
                true
            }
            _ => false,
        }
    }

    /// Takes the handler's result; a decided spin becomes the pending result
    /// unless the spin was cancelled in the meantime.
    pub fn finish_spin(&mut self, result: &Result<SpinOutcome, SpinError>) {
        let cancelled = self
            .cancel
            .take()
            .map(|tx| *tx.borrow())
            .unwrap_or(false);
        self.animating = false;
        self.pending = match result {
            Ok(SpinOutcome::Decided(decision)) if !cancelled => Some(decision.clone()),
            _ => None,
        };
    }

    /// Confirms the pending result and clears it.
    pub fn accept(&mut self) -> Option<Decision> {
        self.pending.take()
    }

    /// Discards the pending result and starts again with the same options.
    pub fn respin(&mut self) -> Result<SpinTicket, SpinError> {
        self.pending = None;
        self.begin_spin()
    }

    /// Reloads options and method from a past decision.
    pub fn repeat(&mut self, decision: &Decision) -> Result<(), OptionSetError> {
        let options = OptionSet::from_choices(decision.options.clone())?;
        self.cancel_spin();
        self.options = options;
        self.method = decision.method;
        self.pending = None;
        Ok(())
    }
}

impl Drop for SpinSession {
    fn drop(&mut self) {
        self.cancel_spin();
    }
}
