//! Driver lifecycle: Idle → Running → Settling → Done, or Aborted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of an animation driver.
///
/// `Running` plays the cosmetic sequence, `Settling` holds the final
/// winner-revealing pose until the driver hands off. `Done` and `Aborted`
/// are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Settling,
    Done,
    Aborted,
}

impl AnimationPhase {
    /// True while ticks still change what is shown.
    pub fn is_active(&self) -> bool {
        matches!(self, AnimationPhase::Running | AnimationPhase::Settling)
    }
}

impl StateMachine for AnimationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AnimationPhase::*;
        matches!(
            (self, target),
            (Idle, Running)
                | (Running, Settling)
                | (Settling, Done)
                | (Idle, Aborted)
                | (Running, Aborted)
                | (Settling, Aborted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AnimationPhase::*;
        match self {
            Idle => vec![Running, Aborted],
            Running => vec![Settling, Aborted],
            Settling => vec![Done, Aborted],
            Done | Aborted => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AnimationPhase; 5] = [
        AnimationPhase::Idle,
        AnimationPhase::Running,
        AnimationPhase::Settling,
        AnimationPhase::Done,
        AnimationPhase::Aborted,
    ];

    #[test]
    fn happy_path_is_valid() {
        let phase = AnimationPhase::Idle
            .transition_to(AnimationPhase::Running)
            .and_then(|p| p.transition_to(AnimationPhase::Settling))
            .and_then(|p| p.transition_to(AnimationPhase::Done));
        assert_eq!(phase, Ok(AnimationPhase::Done));
    }

    #[test]
    fn cannot_skip_settling() {
        assert!(AnimationPhase::Running
            .transition_to(AnimationPhase::Done)
            .is_err());
    }

    #[test]
    fn terminal_phases() {
        assert!(AnimationPhase::Done.is_terminal());
        assert!(AnimationPhase::Aborted.is_terminal());
        assert!(!AnimationPhase::Settling.is_terminal());
    }

    #[test]
    fn every_live_phase_can_abort() {
        for phase in [AnimationPhase::Idle, AnimationPhase::Running, AnimationPhase::Settling] {
            assert!(phase.can_transition_to(&AnimationPhase::Aborted));
        }
    }

    #[test]
    fn advance_to_leaves_phase_untouched_on_error() {
        let mut phase = AnimationPhase::Done;
        assert!(phase.advance_to(AnimationPhase::Running).is_err());
        assert_eq!(phase, AnimationPhase::Done);
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
