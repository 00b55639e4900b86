//! State machine trait for lifecycle enums.
//!
//! Animation drivers advance through a fixed set of phases; this trait gives
//! those phase enums validated transitions.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors declare their transition table and get validated
/// transition methods for free.
///
/// ```ignore
/// let next = AnimationPhase::Idle.transition_to(AnimationPhase::Running)?;
/// assert!(AnimationPhase::Done.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Transitions in place, leaving `self` untouched on failure.
    fn advance_to(&mut self, target: Self) -> Result<(), ValidationError> {
        *self = self.transition_to(target)?;
        Ok(())
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
