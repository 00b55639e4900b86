//! Coin driver for exactly two options: heads is the first, tails the second.

use std::time::Duration;

use serde::Serialize;

use super::driver::{AnimationDriver, StartOutcome};
use super::easing::{ease_out_cubic, sample_keyframes};
use super::frame::AnimationFrame;
use super::kind::AnimationKind;
use super::phase::AnimationPhase;
use super::timeline::Timeline;
use crate::domain::options::{position_of, Choice};
use crate::ports::RandomSource;

pub const FLIP_INTERVAL: Duration = Duration::from_millis(150);
pub const MIN_FLIPS: u32 = 10;
pub const MAX_FLIPS: u32 = 14;

/// Bounce height in pixels, evenly spaced across the flip.
pub const BOUNCE_KEYFRAMES: [f64; 11] =
    [0.0, 50.0, 100.0, 120.0, 100.0, 80.0, 60.0, 40.0, 20.0, 10.0, 0.0];

/// Spin added per keyframe step.
pub const DEGREES_PER_STEP: f64 = 180.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    #[default]
    Heads,
    Tails,
}

impl CoinFace {
    pub fn toggled(self) -> Self {
        match self {
            CoinFace::Heads => CoinFace::Tails,
            CoinFace::Tails => CoinFace::Heads,
        }
    }

    /// Heads for the first option, tails for anything else.
    pub fn for_winner(index: usize) -> Self {
        if index == 0 {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinFrame {
    pub face: CoinFace,
    pub flips: u32,
    pub height: f64,
    pub rotation_deg: f64,
    pub heads_label: String,
    pub tails_label: String,
    pub flipping: bool,
    pub landed: bool,
}

#[derive(Debug, Clone)]
pub struct CoinDriver {
    face: CoinFace,
    final_face: CoinFace,
    flips: u32,
    max_flips: u32,
    since_flip: Duration,
    labels: Option<(String, String)>,
    timeline: Timeline,
}

impl CoinDriver {
    pub fn new() -> Self {
        Self {
            face: CoinFace::Heads,
            final_face: CoinFace::Heads,
            flips: 0,
            max_flips: MIN_FLIPS,
            since_flip: Duration::ZERO,
            labels: None,
            timeline: Self::fresh_timeline(),
        }
    }

    fn fresh_timeline() -> Timeline {
        Timeline::new(AnimationKind::Coin.duration(), Duration::ZERO)
    }

    pub fn face(&self) -> CoinFace {
        self.face
    }

    pub fn flips(&self) -> u32 {
        self.flips
    }

    fn eased(&self) -> f64 {
        ease_out_cubic(self.timeline.progress())
    }
}

impl Default for CoinDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for CoinDriver {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Coin
    }

    fn phase(&self) -> AnimationPhase {
        self.timeline.phase()
    }

    fn start(
        &mut self,
        options: &[Choice],
        winner: &Choice,
        rng: &dyn RandomSource,
    ) -> StartOutcome {
        self.timeline = Self::fresh_timeline();
        self.labels = None;

        if !AnimationKind::Coin.driver_accepts(options.len()) {
            return StartOutcome::Placeholder;
        }
        let Some(index) = position_of(options, winner) else {
            return StartOutcome::Placeholder;
        };

        self.labels = Some((options[0].text.clone(), options[1].text.clone()));
        self.face = CoinFace::Heads;
        self.final_face = CoinFace::for_winner(index);
        self.flips = 0;
        self.max_flips = rng.range_inclusive(MIN_FLIPS, MAX_FLIPS);
        self.since_flip = Duration::ZERO;

        match self.timeline.start() {
            Ok(()) => StartOutcome::Started,
            Err(_) => {
                self.labels = None;
                StartOutcome::Placeholder
            }
        }
    }

    fn tick(&mut self, dt: Duration, _rng: &dyn RandomSource) -> AnimationPhase {
        let step = self.timeline.advance(dt);

        if step.entered_settling {
            self.face = self.final_face;
        } else if self.timeline.phase() == AnimationPhase::Running {
            self.since_flip += dt;
            while self.since_flip >= FLIP_INTERVAL && self.flips < self.max_flips {
                self.since_flip -= FLIP_INTERVAL;
                self.face = self.face.toggled();
                self.flips += 1;
            }
        }
        self.timeline.phase()
    }

    fn abort(&mut self) -> bool {
        self.timeline.abort()
    }

    fn frame(&self) -> AnimationFrame {
        let Some((heads, tails)) = &self.labels else {
            return AnimationFrame::placeholder(AnimationKind::Coin);
        };
        let eased = self.eased();
        let steps = (BOUNCE_KEYFRAMES.len() - 1) as f64;
        AnimationFrame::Coin(CoinFrame {
            face: self.face,
            flips: self.flips,
            height: sample_keyframes(&BOUNCE_KEYFRAMES, eased),
            rotation_deg: eased * steps * DEGREES_PER_STEP,
            heads_label: heads.clone(),
            tails_label: tails.clone(),
            flipping: self.timeline.phase() == AnimationPhase::Running,
            landed: matches!(
                self.timeline.phase(),
                AnimationPhase::Settling | AnimationPhase::Done
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRandomSource, SeededRandomSource};

    fn pizza_tacos() -> Vec<Choice> {
        vec![
            Choice::new("1", "Pizza", "#FF006E"),
            Choice::new("2", "Tacos", "#8338EC"),
        ]
    }

    fn land(options: &[Choice], winner: &Choice) -> CoinDriver {
        let rng = SeededRandomSource::new(11);
        let mut driver = CoinDriver::new();
        assert_eq!(driver.start(options, winner, &rng), StartOutcome::Started);
        while driver.phase().is_active() {
            driver.tick(Duration::from_millis(16), &rng);
        }
        driver
    }

    #[test]
    fn first_option_lands_heads() {
        let opts = pizza_tacos();
        let driver = land(&opts, &opts[0]);
        assert_eq!(driver.phase(), AnimationPhase::Done);
        assert_eq!(driver.face(), CoinFace::Heads);
    }

    #[test]
    fn second_option_lands_tails() {
        let opts = pizza_tacos();
        let driver = land(&opts, &opts[1]);
        assert_eq!(driver.face(), CoinFace::Tails);
        match driver.frame() {
            AnimationFrame::Coin(frame) => {
                assert!(frame.landed);
                assert!(!frame.flipping);
                assert_eq!(frame.heads_label, "Pizza");
                assert_eq!(frame.tails_label, "Tacos");
                assert_eq!(frame.height, 0.0);
                assert_eq!(frame.rotation_deg, 1800.0);
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn any_other_count_shows_the_placeholder() {
        let rng = SeededRandomSource::new(1);
        for count in [1usize, 3, 5] {
            let opts: Vec<Choice> = (0..count)
                .map(|i| Choice::new(format!("{}", i), "x", "#FF006E"))
                .collect();
            let mut driver = CoinDriver::new();
            assert_eq!(driver.start(&opts, &opts[0], &rng), StartOutcome::Placeholder);
            assert_eq!(driver.phase(), AnimationPhase::Idle);
            assert_eq!(driver.frame(), AnimationFrame::placeholder(AnimationKind::Coin));
        }
    }

    #[test]
    fn flips_are_capped_by_the_random_limit() {
        let rng = FixedRandomSource::constant(3);
        let opts = pizza_tacos();
        let mut driver = CoinDriver::new();
        driver.start(&opts, &opts[0], &rng);

        driver.tick(Duration::from_millis(1999), &rng);
        assert_eq!(driver.flips(), MIN_FLIPS);
        assert_eq!(driver.phase(), AnimationPhase::Running);
    }

    #[test]
    fn first_toggle_shows_tails() {
        let rng = SeededRandomSource::new(5);
        let opts = pizza_tacos();
        let mut driver = CoinDriver::new();
        driver.start(&opts, &opts[0], &rng);
        driver.tick(Duration::from_millis(150), &rng);
        assert_eq!(driver.face(), CoinFace::Tails);
        assert_eq!(driver.flips(), 1);
    }

    #[test]
    fn bounce_peaks_mid_flight() {
        let rng = SeededRandomSource::new(5);
        let opts = pizza_tacos();
        let mut driver = CoinDriver::new();
        driver.start(&opts, &opts[0], &rng);
        driver.tick(Duration::from_millis(200), &rng);
        match driver.frame() {
            AnimationFrame::Coin(frame) => {
                assert!(frame.height > 0.0);
                assert!(frame.rotation_deg > 0.0);
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }
}
