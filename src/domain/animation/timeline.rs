//! Phase bookkeeping shared by every driver.

use std::time::Duration;

use super::easing::progress;
use super::phase::AnimationPhase;
use crate::domain::foundation::{StateMachine, ValidationError};

/// What a single `advance` call crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Progress through the running window, `[0, 1]`.
    pub progress: f64,
    /// The running window ended during this step.
    pub entered_settling: bool,
    /// The settle window ended during this step.
    pub finished: bool,
}

/// Clock and phase for one animation: a running window then a settle window.
#[derive(Debug, Clone)]
pub struct Timeline {
    phase: AnimationPhase,
    elapsed: Duration,
    running: Duration,
    settling: Duration,
}

impl Timeline {
    pub fn new(running: Duration, settling: Duration) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            elapsed: Duration::ZERO,
            running,
            settling,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn progress(&self) -> f64 {
        progress(self.elapsed, self.running)
    }

    /// Progress through the settle window, `[0, 1]`.
    pub fn settle_progress(&self) -> f64 {
        progress(self.elapsed.saturating_sub(self.running), self.settling)
    }

    pub fn start(&mut self) -> Result<(), ValidationError> {
        self.phase.advance_to(AnimationPhase::Running)?;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Moves the clock forward. A large `dt` may cross both windows at once.
    pub fn advance(&mut self, dt: Duration) -> Step {
        let mut step = Step {
            progress: self.progress(),
            entered_settling: false,
            finished: false,
        };
        if !self.phase.is_active() {
            return step;
        }

        self.elapsed += dt;
        if self.phase == AnimationPhase::Running
            && self.elapsed >= self.running
            && self.phase.advance_to(AnimationPhase::Settling).is_ok()
        {
            step.entered_settling = true;
        }
        if self.phase == AnimationPhase::Settling
            && self.elapsed >= self.running + self.settling
            && self.phase.advance_to(AnimationPhase::Done).is_ok()
        {
            step.finished = true;
        }
        step.progress = self.progress();
        step
    }

    /// Moves to `Aborted` unless already terminal. Returns whether it did.
    pub fn abort(&mut self) -> bool {
        self.phase.advance_to(AnimationPhase::Aborted).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn advance_before_start_does_nothing() {
        let mut timeline = Timeline::new(MS_100, Duration::ZERO);
        let step = timeline.advance(MS_100);
        assert!(!step.entered_settling);
        assert_eq!(timeline.phase(), AnimationPhase::Idle);
        assert_eq!(timeline.elapsed(), Duration::ZERO);
    }

    #[test]
    fn zero_settle_window_is_crossed_in_the_same_step() {
        let mut timeline = Timeline::new(MS_100, Duration::ZERO);
        timeline.start().unwrap();

        let step = timeline.advance(Duration::from_millis(60));
        assert_eq!(timeline.phase(), AnimationPhase::Running);
        assert!((step.progress - 0.6).abs() < 1e-9);

        let step = timeline.advance(Duration::from_millis(60));
        assert!(step.entered_settling);
        assert!(step.finished);
        assert_eq!(timeline.phase(), AnimationPhase::Done);
    }

    #[test]
    fn settle_window_holds_the_final_pose() {
        let mut timeline = Timeline::new(MS_100, Duration::from_millis(50));
        timeline.start().unwrap();

        let step = timeline.advance(Duration::from_millis(120));
        assert!(step.entered_settling);
        assert!(!step.finished);
        assert_eq!(timeline.phase(), AnimationPhase::Settling);
        assert!((timeline.settle_progress() - 0.4).abs() < 1e-9);

        assert!(timeline.advance(Duration::from_millis(30)).finished);
    }

    #[test]
    fn abort_is_terminal() {
        let mut timeline = Timeline::new(MS_100, Duration::ZERO);
        timeline.start().unwrap();
        assert!(timeline.abort());
        assert_eq!(timeline.phase(), AnimationPhase::Aborted);
        assert!(!timeline.abort());

        let step = timeline.advance(Duration::from_secs(1));
        assert!(!step.finished);
        assert_eq!(timeline.phase(), AnimationPhase::Aborted);
    }

    #[test]
    fn cannot_start_twice() {
        let mut timeline = Timeline::new(MS_100, Duration::ZERO);
        timeline.start().unwrap();
        assert!(timeline.start().is_err());
    }
}
