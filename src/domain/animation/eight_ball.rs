//! Magic 8-Ball driver: shake, then fade the winner in as the answer.

use std::time::Duration;

use serde::Serialize;

use super::driver::{AnimationDriver, StartOutcome};
use super::easing::sample_keyframes;
use super::frame::AnimationFrame;
use super::kind::AnimationKind;
use super::phase::AnimationPhase;
use super::timeline::Timeline;
use crate::domain::options::{position_of, truncate_label, Choice};
use crate::ports::RandomSource;

/// Characters that fit in the answer window.
pub const ANSWER_MAX_CHARS: usize = 10;

pub const REVEAL_WINDOW: Duration = Duration::from_millis(500);

pub const SHAKE_X: [f64; 9] = [-5.0, 5.0, -5.0, 5.0, -3.0, 3.0, -3.0, 3.0, 0.0];
pub const SHAKE_Y: [f64; 9] = [-3.0, 3.0, -3.0, 3.0, -2.0, 2.0, -2.0, 2.0, 0.0];
pub const SHAKE_TILT: [f64; 9] = [-2.0, 2.0, -2.0, 2.0, -1.0, 1.0, -1.0, 1.0, 0.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EightBallFrame {
    pub offset_x: f64,
    pub offset_y: f64,
    pub tilt_deg: f64,
    /// Hidden until the ball settles.
    pub answer: Option<String>,
    pub answer_opacity: f64,
    pub shaking: bool,
    /// How many options were in the ball.
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct EightBallDriver {
    answer: Option<String>,
    candidates: usize,
    timeline: Timeline,
}

impl EightBallDriver {
    pub fn new() -> Self {
        Self {
            answer: None,
            candidates: 0,
            timeline: Self::fresh_timeline(),
        }
    }

    fn fresh_timeline() -> Timeline {
        Timeline::new(AnimationKind::EightBall.duration(), REVEAL_WINDOW)
    }

    fn revealed(&self) -> bool {
        matches!(
            self.timeline.phase(),
            AnimationPhase::Settling | AnimationPhase::Done
        )
    }
}

impl Default for EightBallDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for EightBallDriver {
    fn kind(&self) -> AnimationKind {
        AnimationKind::EightBall
    }

    fn phase(&self) -> AnimationPhase {
        self.timeline.phase()
    }

    fn start(
        &mut self,
        options: &[Choice],
        winner: &Choice,
        _rng: &dyn RandomSource,
    ) -> StartOutcome {
        self.timeline = Self::fresh_timeline();
        self.answer = None;
        self.candidates = 0;

        if !AnimationKind::EightBall.driver_accepts(options.len())
            || position_of(options, winner).is_none()
        {
            return StartOutcome::Placeholder;
        }

        match self.timeline.start() {
            Ok(()) => {
                self.answer = Some(truncate_label(&winner.text, ANSWER_MAX_CHARS));
                self.candidates = options.len();
                StartOutcome::Started
            }
            Err(_) => StartOutcome::Placeholder,
        }
    }

    fn tick(&mut self, dt: Duration, _rng: &dyn RandomSource) -> AnimationPhase {
        self.timeline.advance(dt);
        self.timeline.phase()
    }

    fn abort(&mut self) -> bool {
        self.timeline.abort()
    }

    fn frame(&self) -> AnimationFrame {
        let Some(answer) = &self.answer else {
            return AnimationFrame::placeholder(AnimationKind::EightBall);
        };
        let shaking = self.timeline.phase() == AnimationPhase::Running;
        let t = self.timeline.progress();
        let revealed = self.revealed();
        AnimationFrame::EightBall(EightBallFrame {
            offset_x: sample_keyframes(&SHAKE_X, t),
            offset_y: sample_keyframes(&SHAKE_Y, t),
            tilt_deg: sample_keyframes(&SHAKE_TILT, t),
            answer: revealed.then(|| answer.clone()),
            answer_opacity: if revealed {
                self.timeline.settle_progress()
            } else {
                0.0
            },
            shaking,
            candidates: self.candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededRandomSource;

    fn options() -> Vec<Choice> {
        vec![
            Choice::new("1", "Stay Home", "#FF006E"),
            Choice::new("2", "Visit Friends Downtown", "#8338EC"),
            Choice::new("3", "Beach", "#FB5607"),
        ]
    }

    fn frame_of(driver: &EightBallDriver) -> EightBallFrame {
        match driver.frame() {
            AnimationFrame::EightBall(frame) => frame,
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn answer_is_hidden_while_shaking() {
        let rng = SeededRandomSource::new(1);
        let opts = options();
        let mut driver = EightBallDriver::new();
        driver.start(&opts, &opts[2], &rng);
        driver.tick(Duration::from_millis(700), &rng);

        let frame = frame_of(&driver);
        assert!(frame.shaking);
        assert_eq!(frame.answer, None);
        assert_eq!(frame.answer_opacity, 0.0);
        assert_eq!(frame.candidates, 3);
    }

    #[test]
    fn answer_fades_in_during_the_reveal_window() {
        let rng = SeededRandomSource::new(1);
        let opts = options();
        let mut driver = EightBallDriver::new();
        driver.start(&opts, &opts[2], &rng);

        driver.tick(Duration::from_millis(2250), &rng);
        assert_eq!(driver.phase(), AnimationPhase::Settling);
        let frame = frame_of(&driver);
        assert_eq!(frame.answer.as_deref(), Some("Beach"));
        assert!((frame.answer_opacity - 0.5).abs() < 1e-9);
        assert_eq!(frame.offset_x, 0.0);

        driver.tick(Duration::from_millis(250), &rng);
        assert_eq!(driver.phase(), AnimationPhase::Done);
        assert_eq!(frame_of(&driver).answer_opacity, 1.0);
    }

    #[test]
    fn long_answers_are_truncated() {
        let rng = SeededRandomSource::new(1);
        let opts = options();
        let mut driver = EightBallDriver::new();
        driver.start(&opts, &opts[1], &rng);
        driver.tick(Duration::from_secs(3), &rng);
        assert_eq!(frame_of(&driver).answer.as_deref(), Some("Visit Frie..."));
    }

    #[test]
    fn shake_follows_the_keyframes() {
        let rng = SeededRandomSource::new(1);
        let opts = options();
        let mut driver = EightBallDriver::new();
        driver.start(&opts, &opts[0], &rng);
        assert_eq!(frame_of(&driver).offset_x, -5.0);

        driver.tick(Duration::from_millis(250), &rng);
        let frame = frame_of(&driver);
        assert!((frame.offset_x - 5.0).abs() < 1e-9);
        assert!((frame.offset_y - 3.0).abs() < 1e-9);
        assert!((frame.tilt_deg - 2.0).abs() < 1e-9);
    }
}
